//! Request dispatcher for the user API.
//!
//! Every request lands here through the application's default service. The
//! path (never the query string) and method are matched against a fixed route
//! table; anything that does not match exactly is answered with 404.

use actix_web::http::{Method, Uri};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;

/// Collection path for the user resource.
pub const USERS_PATH: &str = "/api/users";
const USER_ITEM_PREFIX: &str = "/api/users/";

/// Operation selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `GET /api/users`.
    ListUsers,
    /// `POST /api/users`.
    CreateUser,
    /// `GET /api/users/{id}` with the raw id segment.
    GetUser(&'a str),
    /// `PUT /api/users/{id}` with the raw id segment.
    UpdateUser(&'a str),
    /// `DELETE /api/users/{id}` with the raw id segment.
    DeleteUser(&'a str),
    /// Anything else; rendered as 404.
    Unmatched,
}

impl<'a> Route<'a> {
    /// Match a method and path.
    ///
    /// The item pattern is `/api/users/{id}` with exactly one trailing
    /// segment, which may be empty; its content is not checked here.
    ///
    /// # Examples
    /// ```
    /// use actix_web::http::Method;
    /// use user_service::inbound::http::dispatch::Route;
    ///
    /// assert_eq!(Route::resolve(&Method::GET, "/api/users"), Route::ListUsers);
    /// assert_eq!(Route::resolve(&Method::GET, "/api/users/abc"), Route::GetUser("abc"));
    /// assert_eq!(Route::resolve(&Method::GET, "/api/users/a/b"), Route::Unmatched);
    /// ```
    pub fn resolve(method: &Method, path: &'a str) -> Self {
        if path == USERS_PATH {
            return if method == Method::GET {
                Self::ListUsers
            } else if method == Method::POST {
                Self::CreateUser
            } else {
                Self::Unmatched
            };
        }

        let Some(id) = path
            .strip_prefix(USER_ITEM_PREFIX)
            .filter(|segment| !segment.contains('/'))
        else {
            return Self::Unmatched;
        };

        if method == Method::GET {
            Self::GetUser(id)
        } else if method == Method::PUT {
            Self::UpdateUser(id)
        } else if method == Method::DELETE {
            Self::DeleteUser(id)
        } else {
            Self::Unmatched
        }
    }
}

/// Run the operation addressed by `method` and `uri`, rendering any failure.
///
/// Exactly one response is produced for every input.
pub async fn dispatch_request(
    state: &HttpState,
    method: &Method,
    uri: &Uri,
    body: &[u8],
) -> HttpResponse {
    let result = match Route::resolve(method, uri.path()) {
        Route::ListUsers => users::list_users(state).await,
        Route::CreateUser => users::create_user(state, body).await,
        Route::GetUser(id) => users::get_user(state, id).await,
        Route::UpdateUser(id) => users::update_user(state, id, body).await,
        Route::DeleteUser(id) => users::delete_user(state, id).await,
        Route::Unmatched => Err(Error::route_not_found(uri, method)),
    };

    result.unwrap_or_else(|err| {
        if err.code() == ErrorCode::InternalError {
            error!(%method, %uri, error = %err, "request failed");
        } else {
            warn!(%method, %uri, code = ?err.code(), error = %err, "request rejected");
        }
        err.error_response()
    })
}

/// Actix entry point registered as the application's default service.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use user_service::inbound::http::dispatch::dispatch;
///
/// let app = App::new().default_service(web::to(dispatch));
/// ```
pub async fn dispatch(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<HttpState>,
) -> HttpResponse {
    dispatch_request(&state, req.method(), req.uri(), &body).await
}
