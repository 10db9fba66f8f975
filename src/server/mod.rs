//! Page server with live reload
//!
//! Pages are resolved and rendered per request. The content API (or an
//! admin tool) posts to `/__content/changed` after an edit; the server drops
//! its cached theme and tells connected browsers to reload.

use anyhow::Result;
use axum::{
    body::{Body, Bytes},
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{header, Method, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cache::hash_content;
use crate::Site;

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state
struct ServerState {
    site: Site,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Body of a change notification
#[derive(Debug, Default, Deserialize)]
struct ChangeNotice {
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    slug: Option<String>,
}

/// Build the application router
pub fn router(site: Site, live_reload: bool) -> Router {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        site,
        reload_tx,
        live_reload,
    });

    Router::new()
        .route("/__livereload", get(livereload_handler))
        .route("/__content/changed", post(content_changed_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the page server
pub async fn start(site: &Site, ip: &str, port: u16, live_reload: bool, open: bool) -> Result<()> {
    let app = router(site.clone(), live_reload);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if live_reload {
        println!("Live reload enabled. POST /__content/changed to refresh.");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

/// Change notification: drop the cached theme and ask clients to reload
async fn content_changed_handler(State(state): State<Arc<ServerState>>, body: Bytes) -> StatusCode {
    let notice: ChangeNotice = if body.is_empty() {
        ChangeNotice::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(notice) => notice,
            Err(e) => {
                tracing::warn!("Ignoring malformed change notice body: {}", e);
                ChangeNotice::default()
            }
        }
    };

    match notice.scope.as_deref() {
        Some("page") => {
            // Block lists are not cached; a reload is enough
            tracing::info!(
                "Content changed for page '{}'",
                notice.slug.as_deref().unwrap_or("*")
            );
        }
        _ => {
            tracing::info!("Theme possibly stale, invalidating cache");
            state.site.resolver.invalidate_theme();
        }
    }

    // No receivers is fine
    let _ = state.reload_tx.send(());
    StatusCode::NO_CONTENT
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            // Wait for reload signal
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            // Handle incoming messages (ping/pong)
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Fallback handler: static assets from the public dir, everything else is
/// treated as a page slug
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = request.uri().path().to_string();

    if path.starts_with("/assets/") || path == "/favicon.ico" {
        let mut service = ServeDir::new(&state.site.public_dir);
        return match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        };
    }

    let slug = percent_decode_str(&path).decode_utf8_lossy().to_string();
    let if_none_match = request
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    // Dropping this future (client gone) cancels the in-flight fetches
    let view = state.site.view(Some(&slug)).await;
    let mut html = state.site.render_view(&view);
    if state.live_reload {
        html = inject_live_reload(&html);
    }

    let etag = format!("\"{:x}\"", hash_content(&html));
    if if_none_match.as_deref() == Some(etag.as_str()) {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        Html(html),
    )
        .into_response()
}

/// Inject live reload script in place of the document's closing `</body>`
fn inject_live_reload(html: &str) -> String {
    // Only the last tag; block markup may contain its own
    match html.rfind("</body>") {
        Some(pos) => format!(
            "{}{}{}",
            &html[..pos],
            LIVE_RELOAD_SCRIPT,
            &html[pos + "</body>".len()..]
        ),
        // If no </body> tag, append to end
        None => format!("{}{}", html, LIVE_RELOAD_SCRIPT),
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
