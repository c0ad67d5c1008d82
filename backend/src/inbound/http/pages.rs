//! Server-rendered HTML pages.
//!
//! Every renderer returns a complete document. Dynamic text (usernames,
//! queries, messages, stored list entries) passes through [`escape`].

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};

use crate::domain::{Category, Destination, SearchOutcome, Username};

/// Shown when a store call fails while handling a form.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";
/// Shown on the login page after a successful registration.
pub const REGISTERED_MESSAGE: &str = "Registration successful! Please log in.";
/// Shown on a destination page after it was added.
pub const ADDED_MESSAGE: &str = "Successfully added to your want-to-go list!";
/// Shown on a destination page when it was already listed.
pub const ALREADY_LISTED_MESSAGE: &str = "This destination is already in your want-to-go list";

/// Optional error and success notices shown above a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Notices<'a> {
    /// Error notice.
    pub error: Option<&'a str>,
    /// Success notice.
    pub success: Option<&'a str>,
}

impl<'a> Notices<'a> {
    /// Notices with only an error.
    pub fn error(message: &'a str) -> Self {
        Self {
            error: Some(message),
            success: None,
        }
    }

    /// Notices with only a success message.
    pub fn success(message: &'a str) -> Self {
        Self {
            error: None,
            success: Some(message),
        }
    }
}

/// Escape text for inclusion in HTML element content or quoted attributes.
///
/// # Examples
/// ```
/// use wanderlist::inbound::http::pages::escape;
///
/// assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap a rendered page in a `text/html` response.
pub fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(body)
}

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Wanderlist</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

fn notices(out: &mut String, notices: Notices<'_>) {
    if let Some(error) = notices.error {
        out.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }
    if let Some(success) = notices.success {
        out.push_str(&format!("<p class=\"success\">{}</p>\n", escape(success)));
    }
}

fn nav(out: &mut String) {
    out.push_str(
        "<nav><a href=\"/home\">Home</a> <a href=\"/wanttogo\">Want-to-go list</a> \
         <a href=\"/logout\">Log out</a></nav>\n",
    );
}

fn destination_link(out: &mut String, destination: Destination) {
    out.push_str(&format!(
        "<li><a href=\"{}\">{}</a></li>\n",
        escape(&destination.path()),
        escape(destination.display_name()),
    ));
}

fn credentials_form(out: &mut String, action: &str, submit: &str) {
    out.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">{submit}</button>\n</form>\n"
    ));
}

/// Login form.
pub fn login_page(page_notices: Notices<'_>) -> String {
    let mut body = String::from("<h1>Log in</h1>\n");
    notices(&mut body, page_notices);
    credentials_form(&mut body, "/login", "Log in");
    body.push_str("<p><a href=\"/registration\">Create an account</a></p>\n");
    layout("Log in", &body)
}

/// Registration form.
pub fn registration_page(error: Option<&str>) -> String {
    let mut body = String::from("<h1>Register</h1>\n");
    notices(
        &mut body,
        Notices {
            error,
            success: None,
        },
    );
    credentials_form(&mut body, "/register", "Register");
    body.push_str("<p><a href=\"/login\">Already registered? Log in</a></p>\n");
    layout("Register", &body)
}

/// Landing page after login.
pub fn home_page(username: &Username) -> String {
    let mut body = String::new();
    nav(&mut body);
    body.push_str(&format!("<h1>Welcome, {}</h1>\n", escape(username.as_ref())));
    body.push_str("<ul class=\"categories\">\n");
    for category in Category::ALL {
        body.push_str(&format!(
            "<li><a href=\"/{}\">{}</a></li>\n",
            category.route_key(),
            escape(category.title()),
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<form method=\"post\" action=\"/search\">\n\
         <input type=\"search\" name=\"Search\" placeholder=\"Search destinations\">\n\
         <button type=\"submit\">Search</button>\n</form>\n",
    );
    layout("Home", &body)
}

/// Category listing.
pub fn category_page(category: Category) -> String {
    let mut body = String::new();
    nav(&mut body);
    body.push_str(&format!(
        "<h1>{}</h1>\n<ul class=\"destinations\">\n",
        escape(category.title()),
    ));
    for destination in category.destinations() {
        destination_link(&mut body, destination);
    }
    body.push_str("</ul>\n");
    layout(category.title(), &body)
}

/// Destination page with its add-to-list form.
pub fn destination_page(destination: Destination, page_notices: Notices<'_>) -> String {
    let mut body = String::new();
    nav(&mut body);
    body.push_str(&format!("<h1>{}</h1>\n", escape(destination.display_name())));
    notices(&mut body, page_notices);
    body.push_str(&format!(
        "<form method=\"post\" action=\"{}/add\">\n\
         <button type=\"submit\">Add to want-to-go list</button>\n</form>\n",
        escape(&destination.path()),
    ));
    layout(destination.display_name(), &body)
}

/// The signed-in user's want-to-go list.
///
/// Entries naming a catalogue destination link to its page; anything else is
/// shown as plain text.
pub fn want_to_go_page(entries: &[String]) -> String {
    let mut body = String::new();
    nav(&mut body);
    body.push_str("<h1>Want-to-go list</h1>\n");
    if entries.is_empty() {
        body.push_str("<p class=\"empty\">Your want-to-go list is empty.</p>\n");
    } else {
        body.push_str("<ul class=\"want-to-go\">\n");
        for entry in entries {
            match Destination::find_by_name(entry) {
                Some(destination) => destination_link(&mut body, destination),
                None => {
                    body.push_str(&format!("<li>{}</li>\n", escape(entry)));
                }
            }
        }
        body.push_str("</ul>\n");
    }
    layout("Want-to-go list", &body)
}

/// Search results.
pub fn search_page(outcome: &SearchOutcome) -> String {
    let mut body = String::new();
    nav(&mut body);
    body.push_str("<h1>Search results</h1>\n");
    match outcome {
        SearchOutcome::NoQuery => {}
        SearchOutcome::NotFound { query } => {
            body.push_str(&format!(
                "<p class=\"not-found\">No destinations match &quot;{}&quot;.</p>\n",
                escape(query),
            ));
        }
        SearchOutcome::Matches {
            query,
            destinations,
        } => {
            body.push_str(&format!(
                "<p>Results for &quot;{}&quot;:</p>\n<ul class=\"results\">\n",
                escape(query),
            ));
            for destination in destinations {
                destination_link(&mut body, *destination);
            }
            body.push_str("</ul>\n");
        }
    }
    layout("Search results", &body)
}

/// Page for unknown paths.
pub fn not_found_page(path: &str) -> String {
    let body = format!(
        "<h1>Page not found</h1>\n<p>No page at <code>{}</code>.</p>\n\
         <p><a href=\"/home\">Back to home</a></p>\n",
        escape(path),
    );
    layout("Not found", &body)
}

/// Page for errors that escaped a handler.
pub fn error_page(status: StatusCode, message: &str, trace_id: Option<&str>) -> String {
    let mut body = format!(
        "<h1>{} {}</h1>\n<p class=\"error\">{}</p>\n",
        status.as_u16(),
        escape(status.canonical_reason().unwrap_or("Error")),
        escape(message),
    );
    if let Some(id) = trace_id {
        body.push_str(&format!(
            "<p class=\"trace\">Reference: <code>{}</code></p>\n",
            escape(id),
        ));
    }
    layout("Error", &body)
}
