use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponseDto {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponseDto {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub version: String,
}
