/*!
 * HTTP API exposing the analysis engine.
 *
 * The engine is a library first; this layer is the thin transport the
 * editor UI and its plugins talk to. All responses are JSON, and error
 * responses use a conventional `{ "detail": ... }` body.
 */

pub mod handlers;
pub mod server;

pub use server::{AppContext, router, run};
