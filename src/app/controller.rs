use std::sync::Arc;

use tracing::{debug, info};

use crate::app::resource::StaticResources;
use crate::app::user::{User, UserRepository};
use crate::handler::Handler;
use crate::http::error::HttpError;
use crate::http::request::HttpRequest;
use crate::http::response::{HttpResponse, StatusCode};
use crate::session::{Session, SessionStore};

pub const USER_ATTRIBUTE: &str = "user";

const INDEX_PAGE: &str = "/index.html";
const LOGIN_PAGE: &str = "/login.html";
const REGISTER_PAGE: &str = "/register.html";
const UNAUTHORIZED_PAGE: &str = "/401.html";
const NOT_FOUND_PAGE: &str = "/404.html";

/// Answers every GET with a fixed greeting.
#[derive(Debug)]
pub struct WelcomeHandler;

impl Handler for WelcomeHandler {
    fn get(&self, _request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        response.set_body("Hello world!");
        Ok(())
    }
}

/// Serves a fixed page under an error status.
#[derive(Debug)]
pub struct ErrorPageHandler {
    resources: Arc<StaticResources>,
    status: StatusCode,
    page: &'static str,
}

impl ErrorPageHandler {
    pub fn unauthorized(resources: Arc<StaticResources>) -> Self {
        Self {
            resources,
            status: StatusCode::Unauthorized,
            page: UNAUTHORIZED_PAGE,
        }
    }

    pub fn not_found(resources: Arc<StaticResources>) -> Self {
        Self {
            resources,
            status: StatusCode::NotFound,
            page: NOT_FOUND_PAGE,
        }
    }

    fn render(&self, response: &mut HttpResponse) -> Result<(), HttpError> {
        response.set_status(self.status);
        match self.resources.read(self.page) {
            Ok(content) => response.set_body(content),
            Err(HttpError::NotFound { .. }) => response.set_body(""),
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

impl Handler for ErrorPageHandler {
    fn get(&self, _request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        self.render(response)
    }
}

/// Serves the file whose URL path matches the request path.
#[derive(Debug)]
pub struct StaticFileHandler {
    resources: Arc<StaticResources>,
    not_found: ErrorPageHandler,
}

impl StaticFileHandler {
    pub fn new(resources: Arc<StaticResources>) -> Self {
        Self {
            not_found: ErrorPageHandler::not_found(Arc::clone(&resources)),
            resources,
        }
    }
}

impl Handler for StaticFileHandler {
    fn get(&self, request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        match self.resources.read(request.path()) {
            Ok(content) => response.set_body(content),
            // deleted after routes were registered
            Err(HttpError::NotFound { .. }) => return self.not_found.render(response),
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct LoginHandler {
    resources: Arc<StaticResources>,
    sessions: Arc<SessionStore>,
    users: Arc<UserRepository>,
}

impl LoginHandler {
    pub fn new(
        resources: Arc<StaticResources>,
        sessions: Arc<SessionStore>,
        users: Arc<UserRepository>,
    ) -> Self {
        Self {
            resources,
            sessions,
            users,
        }
    }

    fn authenticate(&self, request: &HttpRequest) -> Result<User, HttpError> {
        let account = request.form_param("account").ok_or(HttpError::Unauthorized)?;
        let password = request.form_param("password").ok_or(HttpError::Unauthorized)?;

        self.users
            .find_by_account(account)
            .filter(|user| user.check_password(password))
            .ok_or(HttpError::Unauthorized)
    }
}

impl Handler for LoginHandler {
    fn get(&self, request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        if request.session().is_some_and(|s| s.has_attribute(USER_ATTRIBUTE)) {
            response.redirect(INDEX_PAGE);
            return Ok(());
        }

        response.set_body(self.resources.read(LOGIN_PAGE)?);
        Ok(())
    }

    fn post(&self, request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        match self.authenticate(request) {
            Ok(user) => {
                let session = Arc::new(Session::new());
                info!(account = %user.account, "Login succeeded");
                session.set_attribute(USER_ATTRIBUTE, user);
                self.sessions.add(Arc::clone(&session));

                response.redirect(INDEX_PAGE);
                response.set_session_cookie(&session);
            }
            Err(HttpError::Unauthorized) => {
                debug!("Login rejected");
                response.redirect(UNAUTHORIZED_PAGE);
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct RegisterHandler {
    resources: Arc<StaticResources>,
    users: Arc<UserRepository>,
}

impl RegisterHandler {
    pub fn new(resources: Arc<StaticResources>, users: Arc<UserRepository>) -> Self {
        Self { resources, users }
    }
}

impl Handler for RegisterHandler {
    fn get(&self, _request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        response.set_body(self.resources.read(REGISTER_PAGE)?);
        Ok(())
    }

    fn post(&self, request: &HttpRequest, response: &mut HttpResponse) -> Result<(), HttpError> {
        let field = |key: &str| request.form_param(key).unwrap_or_default();
        let user = User::new(field("account"), field("password"), field("email"));

        if user.account.is_empty() || !self.users.save(user) {
            response.redirect(REGISTER_PAGE);
            return Ok(());
        }

        response.redirect(INDEX_PAGE);
        Ok(())
    }
}
