use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use rbac_dash::config::Config;
use rbac_dash::handlers;
use rbac_dash::models::workspace::Workspaces;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let secret_key = config.cookie_key();
    let bind_addr = config.bind_addr();

    // Every store lives here and nowhere else; a restart starts from seed data.
    let workspaces = web::Data::new(Workspaces::with_limits(
        config.workspace_idle,
        config.max_workspaces,
    ));
    let config = web::Data::new(config);

    log::info!("Starting server at http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(workspaces.clone())
            .app_data(config.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
