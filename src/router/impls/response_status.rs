use std::fmt;
use crate::router::enums::response_status::ResponseStatus;

impl ResponseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ResponseStatus::Ok => "ok",
            ResponseStatus::NotFound => "not_found",
            ResponseStatus::ExecutionError => "execution_error",
            ResponseStatus::Timeout => "timeout",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
