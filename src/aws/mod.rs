//! AWS credentials and SigV4 request signing shared by the S3 reader and
//! the CloudWatch publisher.
mod credentials;
mod signer;


pub use credentials::{
    ACCESS_KEY_ID_VAR, AwsCredentials, DEFAULT_REGION, REGION_VAR, SECRET_ACCESS_KEY_VAR,
    SESSION_TOKEN_VAR,
};
pub use signer::Signer;
