//! 共通の抽象化レイヤーとトレイト定義

pub mod http;
pub mod params;
pub mod traits;

pub use http::{Method, Request, Response, REQUESTED_WITH_HEADER, XML_HTTP_REQUEST};
pub use params::ParameterBag;
pub use traits::{FormRequest, Middleware};

#[cfg(test)]
pub use traits::MockFormRequest;
