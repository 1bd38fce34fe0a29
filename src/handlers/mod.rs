pub mod answer;
pub mod option;
pub mod question;
pub mod user;

use crate::actix_web::web::{delete, get, patch, post, scope, ServiceConfig};
use crate::core::ports::repository::Manager;

/// Mounts every resource. User update and delete live under `/user/{id}`,
/// everything else under the plural collection path.
pub fn routes<M>(cfg: &mut ServiceConfig)
where
    M: Manager + 'static,
{
    cfg.service(
        scope("/users")
            .route("", get().to(user::list::<M>))
            .route("", post().to(user::create::<M>))
            .route("/{id}", get().to(user::detail::<M>)),
    )
    .service(
        scope("/user")
            .route("/{id}", patch().to(user::update::<M>))
            .route("/{id}", delete().to(user::delete::<M>)),
    )
    .service(
        scope("/questions")
            .route("", get().to(question::list::<M>))
            .route("", post().to(question::create::<M>))
            .service(
                scope("/{id}")
                    .route("", get().to(question::detail::<M>))
                    .route("", patch().to(question::update::<M>))
                    .route("", delete().to(question::delete::<M>))
                    .route("/options", get().to(option::of_question::<M>)),
            ),
    )
    .service(
        scope("/options")
            .route("", get().to(option::list::<M>))
            .route("", post().to(option::create::<M>))
            .route("/{id}", get().to(option::detail::<M>))
            .route("/{id}", patch().to(option::update::<M>))
            .route("/{id}", delete().to(option::delete::<M>)),
    )
    .service(
        scope("/answers")
            .route("", get().to(answer::list::<M>))
            .route("", post().to(answer::create::<M>))
            .route("/{id}", get().to(answer::detail::<M>))
            .route("/{id}", patch().to(answer::update::<M>))
            .route("/{id}", delete().to(answer::delete::<M>)),
    );
}
