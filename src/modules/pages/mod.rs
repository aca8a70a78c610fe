use askama::Template;
use async_trait::async_trait;
use axum::{extract::Path, response::Html, routing::get, Router};

use bookfront_http::error::PageError;
use bookfront_kernel::{InitCtx, Module};

/// Server-rendered catalog pages. All four pages are shells; the page
/// script populates them from the catalog API in the browser.
pub struct PagesModule;

impl PagesModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for PagesModule {
    fn name(&self) -> &'static str {
        "pages"
    }

    fn base_path(&self) -> &'static str {
        "/"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "pages module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/book/add", get(add_book))
            .route("/authors", get(authors))
            .route("/book/{book_id}", get(book_detail))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "pages module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "pages module stopped");
        Ok(())
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage;

#[derive(Template)]
#[template(path = "add_book.html")]
struct AddBookPage;

#[derive(Template)]
#[template(path = "authors.html")]
struct AuthorsPage;

#[derive(Template)]
#[template(path = "book_detail.html")]
struct BookDetailPage {
    book_id: u64,
}

/// GET /
async fn index() -> Result<Html<String>, PageError> {
    Ok(Html(IndexPage.render()?))
}

/// GET /book/add
async fn add_book() -> Result<Html<String>, PageError> {
    Ok(Html(AddBookPage.render()?))
}

/// GET /authors
async fn authors() -> Result<Html<String>, PageError> {
    Ok(Html(AuthorsPage.render()?))
}

/// GET /book/{book_id}
///
/// The id segment must parse as an unsigned integer; anything else is
/// treated as an unmatched route. No lookup is performed against a data
/// source, so unknown ids still render.
async fn book_detail(Path(book_id): Path<String>) -> Result<Html<String>, PageError> {
    let book_id: u64 = book_id
        .parse()
        .map_err(|_| PageError::not_found(format!("no page at /book/{book_id}")))?;

    Ok(Html(BookDetailPage { book_id }.render()?))
}

/// Create a new instance of the pages module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(PagesModule::new())
}
