pub mod activity;
pub mod concurrency;
pub mod health;
pub mod portal;

use actix_web::web;

/// Register every HTTP route the portal serves
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::controllers::configure)
        .configure(portal::controllers::configure)
        .configure(concurrency::controllers::configure)
        .configure(activity::controllers::configure);
}
