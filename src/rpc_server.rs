//! Classifieds RPC Server: JSON-RPC over stdin/stdout for a UI front-end.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.toggle", "params":{"id":"1","title":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries only protocol lines.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Instant;

use classifieds::app::App;
use classifieds::logging;
use classifieds::rpc_handler::handle_method;
use classifieds::services::settings_engine::SettingsEngineTrait;

use serde_json::{json, Value};

/// Fixed-window request limiter.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> ExitCode {
    let config_path = std::env::var("CLASSIFIEDS_CONFIG").ok();
    let app = match App::new(config_path) {
        Ok(app) => app,
        Err(e) => {
            logging::init("classifieds=info");
            tracing::error!(error = %e, "failed to start");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&app.settings_engine.get_settings().logging.filter);
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if emit(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")})).is_err() {
        return ExitCode::FAILURE;
    }

    let mut rate_limiter = RateLimiter::new(200);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or(json!({}));
                    match handle_method(&app, method, &params) {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    }
                }
            }
        };

        if emit(&mut out, &response).is_err() {
            break;
        }
    }

    ExitCode::SUCCESS
}
