use clap::Parser;
use deskline::api::search::SearchExportOptions;
use deskline::client::{Client, SearchExportApi};
use deskline::types::cursor::CursorState;
use http::HeaderValue;
use http::header::AUTHORIZATION;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deskline - export search results page by page")]
struct Args {
    /// Account subdomain (e.g., acme for acme.zendesk.com)
    #[arg(short, long)]
    subdomain: String,

    /// Search query (e.g., "type:ticket status:open")
    #[arg(short, long)]
    query: String,

    /// Only return results of this type (ticket, user, organization, group, topic)
    #[arg(short = 't', long)]
    filter_type: Option<String>,

    /// Results per page
    #[arg(long, default_value_t = 100)]
    page_size: u32,

    /// Stop after this many pages
    #[arg(long, default_value_t = 10)]
    max_pages: usize,

    /// Resume after this cursor
    #[arg(long)]
    cursor: Option<String>,

    /// Value for the Authorization header (e.g., "Bearer <token>")
    #[arg(long)]
    authorization: Option<String>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut client = Client::for_subdomain(reqwest::Client::new(), &args.subdomain)?;
    if let Some(auth) = &args.authorization {
        client.set_header(AUTHORIZATION, HeaderValue::from_str(auth).into_diagnostic()?);
    }

    let mut opts = SearchExportOptions::new()
        .query(args.query.as_str())
        .page_size(args.page_size)
        .maybe_filter_type(args.filter_type.as_deref())
        .cursor(args.cursor.map(CursorState::after).unwrap_or_default())
        .build();

    for page in 1..=args.max_pages {
        let (results, meta) = client.search_export(Some(&opts)).await?;

        println!("page {page} ({} results)", results.len());
        for result in &results {
            println!("  {:<12} {}", result.kind(), result.id());
        }

        match opts.next_page(&meta)? {
            Some(next) => opts = next,
            None => {
                println!("done");
                return Ok(());
            }
        }
    }

    if let Some(cursor) = opts.cursor.cursor {
        println!("stopped after {} pages; resume with --cursor {cursor}", args.max_pages);
    }
    Ok(())
}
