//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `goaltrack_core::storage`.
//! Conditional-check rejections stay distinct from every other failure;
//! connectivity and throttling faults surface as transient.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use goaltrack_core::storage::StoreError;

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    match err {
        SdkError::TimeoutError(_) => StoreError::Unavailable("request timed out".to_string()),
        SdkError::DispatchFailure(e) => {
            StoreError::Unavailable(format!("dispatch failure: {e:?}"))
        }
        err => match err.into_service_error() {
            GetItemError::ProvisionedThroughputExceededException(_) => {
                StoreError::Unavailable("throughput exceeded, please retry".to_string())
            }
            GetItemError::RequestLimitExceeded(_) => {
                StoreError::Unavailable("request limit exceeded, please retry".to_string())
            }
            GetItemError::InternalServerError(_) => {
                StoreError::Unavailable("DynamoDB internal server error".to_string())
            }
            GetItemError::ResourceNotFoundException(_) => {
                StoreError::QueryFailed("table not found".to_string())
            }
            err => StoreError::QueryFailed(format!("GetItem failed: {:?}", err)),
        },
    }
}

/// Map a PutItem SDK error to StoreError.
///
/// The conditional-check rejection is the one signal callers translate into
/// a domain error, so it maps to `AlreadyExists` and nothing else does.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    partition_key: &str,
    sort_key: &str,
) -> StoreError {
    match err {
        SdkError::TimeoutError(_) => StoreError::Unavailable("request timed out".to_string()),
        SdkError::DispatchFailure(e) => {
            StoreError::Unavailable(format!("dispatch failure: {e:?}"))
        }
        err => match err.into_service_error() {
            PutItemError::ConditionalCheckFailedException(_) => StoreError::AlreadyExists {
                partition_key: partition_key.to_string(),
                sort_key: sort_key.to_string(),
            },
            PutItemError::ProvisionedThroughputExceededException(_) => {
                StoreError::Unavailable("throughput exceeded, please retry".to_string())
            }
            PutItemError::RequestLimitExceeded(_) => {
                StoreError::Unavailable("request limit exceeded, please retry".to_string())
            }
            PutItemError::InternalServerError(_) => {
                StoreError::Unavailable("DynamoDB internal server error".to_string())
            }
            PutItemError::ResourceNotFoundException(_) => {
                StoreError::QueryFailed("table not found".to_string())
            }
            PutItemError::TransactionConflictException(_) => {
                StoreError::QueryFailed("transaction conflict".to_string())
            }
            PutItemError::ItemCollectionSizeLimitExceededException(_) => {
                StoreError::QueryFailed("item collection size limit exceeded".to_string())
            }
            err => StoreError::QueryFailed(format!("PutItem failed: {:?}", err)),
        },
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StoreError {
    match err {
        SdkError::TimeoutError(_) => StoreError::Unavailable("request timed out".to_string()),
        SdkError::DispatchFailure(e) => {
            StoreError::Unavailable(format!("dispatch failure: {e:?}"))
        }
        err => match err.into_service_error() {
            QueryError::ProvisionedThroughputExceededException(_) => {
                StoreError::Unavailable("throughput exceeded, please retry".to_string())
            }
            QueryError::RequestLimitExceeded(_) => {
                StoreError::Unavailable("request limit exceeded, please retry".to_string())
            }
            QueryError::InternalServerError(_) => {
                StoreError::Unavailable("DynamoDB internal server error".to_string())
            }
            QueryError::ResourceNotFoundException(_) => {
                StoreError::QueryFailed("table or index not found".to_string())
            }
            err => StoreError::QueryFailed(format!("Query failed: {:?}", err)),
        },
    }
}
