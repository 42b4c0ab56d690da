//! Declarative request parameter binding for http handlers.
//!
//! Instead of pulling each parameter out of a request by hand, declare a struct whose fields
//! carry a tag naming where their value lives, and let the binder fill it in:
//!
//! ```
//! use http::Request;
//! use micro_bind::{Bind, bind_request};
//!
//! #[derive(Bind, Default, Debug)]
//! struct Search {
//!     // read from the `q` query parameter
//!     #[bind("label=q")]
//!     query: String,
//!     // read from the `x-user-email` header, matched case-insensitively
//!     #[bind("in=header,label=x-user-email")]
//!     email: String,
//!     // never bound
//!     #[bind("-")]
//!     cursor: String,
//! }
//!
//! let request = Request::builder()
//!     .uri("/search?q=rust")
//!     .header("X-User-Email", "a@b.com")
//!     .body(())
//!     .unwrap();
//!
//! let search: Search = bind_request(&request).unwrap();
//! assert_eq!(search.query, "rust");
//! assert_eq!(search.email, "a@b.com");
//! assert_eq!(search.cursor, "");
//! ```
//!
//! Every field that is not skipped is required: binding stops at the first field, in
//! declaration order, whose value is absent or empty and reports it as
//! [`BindError::MissingField`].
//!
//! The tag grammar is described in [`tag`]. [`BindHandler`] wires binding in front of a
//! [`Handler`] and hands the result over through [`Bound`].

mod binder;
mod bound;
mod error;
mod handler;
mod shape;
mod view;

pub mod tag;

pub use binder::Binder;
pub use binder::bind;
pub use binder::bind_parts;
pub use binder::bind_request;
pub use bound::Bound;
pub use error::BindError;
pub use error::BuildError;
pub use handler::BindHandler;
pub use handler::BindHandlerBuilder;
pub use handler::Handler;
pub use handler::HandlerFn;
pub use handler::make_handler;
pub use shape::Bindable;
pub use shape::Field;
pub use shape::Shape;
pub use shape::ShapeKind;
pub use view::RequestParts;
pub use view::RequestView;

/// Derive [`Bindable`] for a struct with named `String` fields.
///
/// Each field may carry one `#[bind("...")]` attribute holding its tag, see [`tag`].
#[cfg(feature = "derive")]
pub use micro_bind_macros::Bind;
