pub mod sagemaker;

pub use sagemaker::SageMakerClient;
