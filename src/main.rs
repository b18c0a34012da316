use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use app::{AppState, create_app};
use document::Page;
use renderer::WeatherRenderer;
use source::create_source;

mod app;
mod document;
mod error;
mod index;
mod renderer;
mod source;
mod weather;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File path or http(s) url of the weather dataset.
    #[arg(short, long, env = "WEATHER_DATA", default_value = "weather_data.json")]
    data: String,

    #[arg(short, long, env = "ASSETS_PATH", default_value = "assets")]
    assets_path: String,

    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Ids of the page elements that city weather is written into.
    #[arg(
        long,
        env = "REGIONS",
        value_delimiter = ',',
        default_value = "nairobi,arusha,kampala"
    )]
    regions: Vec<String>,

    #[arg(short, long, env = "KEY_FILE_PATH", requires = "cert_file_path")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut page = Page::new(&args.regions);
    WeatherRenderer::new(create_source(&args.data))
        .render(&mut page)
        .await;

    let state = AppState {
        page: Arc::new(page),
    };
    let app = create_app(state, &args.assets_path);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    log::info!("listening on {}", addr);
    match (args.key_file_path, args.cert_file_path) {
        (Some(key_file_path), Some(cert_file_path)) => {
            log::info!(
                "using tls with key file {} and cert file {}",
                key_file_path,
                cert_file_path
            );
            let tls = RustlsConfig::from_pem_file(cert_file_path, key_file_path).await?;
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await
        }
        _ => {
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
        }
    }
}
