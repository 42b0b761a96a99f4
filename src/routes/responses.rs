//! HTML error panels, page renders and JSON envelopes.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde::Serialize;
use tera::Tera;

use crate::dto::ViewContext;
use crate::dto::api::ApiResponse;

/// Standard error pages of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPage {
    NotFound,
    ServerError,
    DatabaseError,
    ValidationError,
}

impl ErrorPage {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorPage::NotFound => StatusCode::NOT_FOUND,
            ErrorPage::ServerError | ErrorPage::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorPage::ValidationError => StatusCode::BAD_REQUEST,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ErrorPage::NotFound => "🚫 Page Not Found",
            ErrorPage::ServerError => "⚠️ Server Error",
            ErrorPage::DatabaseError => "💾 Database Error",
            ErrorPage::ValidationError => "⚠️ Validation Error",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorPage::NotFound => "The page you're looking for doesn't exist.",
            ErrorPage::ServerError => "Something went wrong. Please try again later.",
            ErrorPage::DatabaseError => "Unable to connect to the database.",
            ErrorPage::ValidationError => "Invalid parameters provided.",
        }
    }

    pub fn respond(self) -> HttpResponse {
        error_response(self.status(), self.title(), self.description())
    }
}

/// Error panel markup. `title` and `message` are embedded verbatim, so callers
/// must not pass untrusted text.
pub fn render_error_panel(error_code: u16, title: &str, message: &str) -> String {
    format!(
        r#"
<div class="no-data">
    <h3>{title}</h3>
    <p>{message}</p>
    <div style="margin-top: 16px;">
        <a href="/" class="btn btn-primary">← Back to Home</a>
        <a href="javascript:history.back()" class="btn btn-secondary" style="margin-left: 8px;">↶ Go Back</a>
    </div>
    <div style="margin-top: 12px; font-size: 12px; color: var(--text-muted);">
        Error Code: {error_code}
    </div>
</div>
"#
    )
}

pub fn error_response(status: StatusCode, title: &str, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_error_panel(status.as_u16(), title, message))
}

/// Renders `template` with `view`, falling back to the server error panel.
pub fn render_page<V: ViewContext>(tera: &Tera, template: &str, view: &V) -> HttpResponse {
    let rendered = view
        .to_context()
        .and_then(|context| tera.render(template, &context));

    match rendered {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            ErrorPage::ServerError.respond()
        }
    }
}

/// JSON body with `200 OK` for successful responses and `400 Bad Request` otherwise.
pub fn api_json<T: Serialize>(response: &ApiResponse<T>) -> HttpResponse {
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    HttpResponse::build(status).json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_panel_embeds_code_title_and_message() {
        let panel = render_error_panel(404, "Missing", "No such token");

        assert!(panel.contains("<h3>Missing</h3>"));
        assert!(panel.contains("<p>No such token</p>"));
        assert!(panel.contains("Error Code: 404"));
    }

    #[test]
    fn error_panel_does_not_escape() {
        let panel = render_error_panel(400, "<b>t</b>", "a & b");

        assert!(panel.contains("<h3><b>t</b></h3>"));
        assert!(panel.contains("<p>a & b</p>"));
    }

    #[test]
    fn error_pages_map_to_status_codes() {
        assert_eq!(ErrorPage::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorPage::DatabaseError.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorPage::ValidationError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorPage::ServerError.respond().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
