use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpServer, middleware::Logger};
use std::path::PathBuf;

// Any path the router owns (e.g. /projects) must resolve to the SPA shell.
async fn spa() -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open("../dist/index.html")?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));        // = site/
    log::info!("serving dist from {:?}", root.join("../dist"));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // ① serve the SPA bundle built by Trunk
            .service(Files::new("/",        "../dist").index_file("index.html"))
            // ② serve top-level static assets
            .service(Files::new("/assets",  root.join("../assets")))
            // ③ fallback -> SPA for any other path
            .default_service(web::get().to(spa))
    })
    .bind(("127.0.0.1", 3000))?
    .run()
    .await?;

    Ok(())
}
