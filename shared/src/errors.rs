use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Unsupported trigger source: {0}")]
    UnsupportedTrigger(String),

    #[error("Missing user attribute: {0}")]
    MissingAttribute(String),

    #[error("DynamoDB error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<aws_sdk_dynamodb::Error> for ProfileError {
    fn from(err: aws_sdk_dynamodb::Error) -> Self {
        ProfileError::Store(err.to_string())
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;
