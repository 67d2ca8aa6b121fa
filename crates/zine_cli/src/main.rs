use clap::Parser;
use std::net::SocketAddr;

use tracing::info;
use zine_core::{seed, ArticleStore, Error, Result};
use zine_render::{ArticleStructuredData, CardView, FullView, SeoHead};
use zine_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 5000)]
    port: u16,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the article feed over HTTP (the default)
    Serve,
    /// Print one article's projection as JSON
    Render {
        id: u64,
        #[arg(long, value_enum, default_value_t = ViewKind::Full)]
        view: ViewKind,
    },
    /// Print the feed page's SEO metadata block
    Meta,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ViewKind {
    Card,
    Full,
    Seo,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = ArticleStore::new(seed::articles())?;
    info!(
        "📚 Loaded {} articles across {} categories",
        store.articles().len(),
        store.categories().len()
    );

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
                .parse()
                .map_err(|e: std::net::AddrParseError| Error::External(e.into()))?;
            zine_web::serve(addr, AppState::new(store)).await
        }
        Commands::Render { id, view } => render(&store, id, view),
        Commands::Meta => {
            println!("{}", serde_json::to_string_pretty(&SeoHead::feed())?);
            Ok(())
        }
    }
}

fn render(store: &ArticleStore, id: u64, view: ViewKind) -> Result<()> {
    let article = store.get(id).ok_or(Error::NotFound(id))?;
    let json = match view {
        ViewKind::Card => serde_json::to_string_pretty(&CardView::project(article))?,
        ViewKind::Full => serde_json::to_string_pretty(&FullView::project(article))?,
        ViewKind::Seo => serde_json::to_string_pretty(&ArticleStructuredData::project(article))?,
    };
    println!("{}", json);
    Ok(())
}
