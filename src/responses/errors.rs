use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) | ServerError::Conflict(msg) => msg.clone(),
        ServerError::XlsxError(msg) => format!("Spreadsheet Error: {msg}"),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    render_error(err.status(), &message)
}

fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn error_page_uses_matching_status_and_escapes_message() {
        let resp = html_error_response(ServerError::BadRequest("<b>bad</b>".into()));
        assert_eq!(resp.status(), 400);

        let mut body = String::new();
        resp.into_body().reader().read_to_string(&mut body).unwrap();
        assert!(body.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn conflict_maps_to_409() {
        assert_eq!(
            html_error_response(ServerError::Conflict("dup".into())).status(),
            409
        );
        assert_eq!(html_error_response(ServerError::NotFound).status(), 404);
    }
}
