use anyhow::Context as _;
use aws_config::BehaviorVersion;
use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{error, info, info_span, warn, Instrument};
use tracing_subscriber::EnvFilter;

use profile_shared::{
    DynamoDBService, PostConfirmationEvent, ProfileError, ProfileResult, ProfileStore,
    RuntimeConfig, UserProfileRecord,
};

const SERVICE_NAME: &str = "user-signup";

async fn function_handler<S>(
    store: &S,
    event: LambdaEvent<PostConfirmationEvent>,
) -> Result<PostConfirmationEvent, Error>
where
    S: ProfileStore,
{
    let (payload, context) = event.into_parts();
    let span = info_span!(
        "post_confirmation",
        service = SERVICE_NAME,
        request_id = %context.request_id
    );

    let response_event = handle_post_confirmation(store, payload)
        .instrument(span)
        .await?;

    Ok(response_event)
}

/// Write the signup profile and hand the event back to Cognito untouched.
///
/// Store failures are logged and swallowed so the signup is never blocked.
/// Only a confirm-signup event without a `sub` is returned as an error.
async fn handle_post_confirmation<S>(
    store: &S,
    event: PostConfirmationEvent,
) -> ProfileResult<PostConfirmationEvent>
where
    S: ProfileStore,
{
    info!("POST_CONFIRMATION Lambda triggered");

    let outcome = event
        .sign_up_attributes()
        .and_then(|attributes| UserProfileRecord::from_attributes(attributes, Utc::now()));

    let record = match outcome {
        Ok(record) => record,
        Err(ProfileError::UnsupportedTrigger(source)) => {
            warn!(trigger_source = %source, "Unsupported triggerSource: {}", source);
            return Ok(event);
        }
        Err(e) => {
            error!(error = %e, "Malformed post confirmation event");
            return Err(e);
        }
    };

    match store.put_profile(&record).await {
        Ok(()) => {
            info!(user_id = %record.user_id, "Added user to DynamoDB: {}", record.user_id);
        }
        Err(e) => {
            error!(
                user_id = %record.user_id,
                error = %e,
                "Failed to write user to DynamoDB"
            );
        }
    }

    Ok(event)
}

async fn build_service() -> anyhow::Result<DynamoDBService> {
    let runtime_config =
        RuntimeConfig::from_env().context("Failed to load runtime configuration")?;

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&config);

    info!(table = %runtime_config.table_name, "Profile table configured");

    Ok(DynamoDBService::new(dynamodb_client, runtime_config.table_name))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    info!("Starting post-confirmation Lambda function");

    let service = build_service().await?;

    run(service_fn(|event| function_handler(&service, event))).await
}
