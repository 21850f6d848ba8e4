use actix_cors::Cors;
use actix_files::Files;
use actix_web::{dev::Server, http::header, middleware, web, App, HttpServer};

use crate::{
    configuration::{AppState, State},
    controller::{connection, dashboard, holders, misc, payout},
    error::Error,
};

pub async fn server_task(app_state: &AppState<State>) -> Result<(), Error> {
    let app = app_state.clone();
    tokio::spawn(async move {
        let server = init_server(app)?;
        server.await?;
        Ok(())
    })
    .await?
}

fn init_server(app_state: AppState<State>) -> Result<Server, Error> {
    let host = app_state.config.server_host.to_owned();
    let port = app_state.config.port;

    let server = HttpServer::new(move || {
        let static_dir = app_state.config.static_dir.to_owned();
        let cors = cors(app_state.clone());

        App::new()
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().limit(4096))
            .service(
                web::scope("/api")
                    .service(dashboard::get_snapshot)
                    .service(dashboard::post_refresh)
                    .service(dashboard::get_logs)
                    .service(connection::status)
                    .service(connection::connect)
                    .service(connection::disconnect)
                    .service(payout::process)
                    .service(payout::force)
                    .service(holders::get_holders)
                    .service(holders::get_overview)
                    .service(misc::collections)
                    .service(misc::collection_image)
                    .service(misc::version),
            )
            .service(Files::new("/", static_dir).index_file("index.html"))
    })
    .bind((host, port))?
    .disable_signals()
    .run();
    Ok(server)
}

fn cors(app_state: AppState<State>) -> Cors {
    Cors::default()
        .allowed_origin_fn(move |origin, _| {
            origin
                .to_str()
                .map(|origin| app_state.config.allows_origin(origin))
                .unwrap_or(false)
        })
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
}
