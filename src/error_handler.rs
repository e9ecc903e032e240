use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::result::Error as DieselError;
use std::fmt;

#[derive(Debug)]
pub struct CustomError {
    pub error_status_code: u16,
    pub error_message: String,
}

impl CustomError {
    pub fn new(error_status_code: u16, error_message: String) -> CustomError {
        CustomError {
            error_status_code,
            error_message,
        }
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_message.as_str())
    }
}

impl From<DieselError> for CustomError {
    fn from(error: DieselError) -> CustomError {
        match error {
            DieselError::NotFound => CustomError::new(404, String::from("Record not found")),
            err => CustomError::new(500, format!("Database error: {}", err)),
        }
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.error_status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Server-side failures keep their cause in the log, never in the body.
        let message = match status.is_server_error() {
            true => {
                log::error!("{}", self.error_message);
                String::from("Internal Server Error")
            }
            false => self.error_message.clone(),
        };
        HttpResponse::build(status).body(message)
    }
}
