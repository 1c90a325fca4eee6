use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ping::ping_handler,
        crate::handlers::default::default_route_handler,
        crate::handlers::auth::send_otp::send_otp_handler,
        crate::handlers::auth::verify_otp::verify_otp_handler,
    ),
    components(
        schemas(
            crate::handlers::auth::send_otp::SendOtpReq,
            crate::handlers::auth::verify_otp::VerifyOtpReq,

            crate::models::GenericResponse,
            crate::models::MessageResponse,
            crate::handlers::auth::verify_otp::VerifyOtpResponse,
        )
    ),
    tags(
        (name = "Debugging API", description = "API for debugging purposes"),
        (name = "Auth API", description = "API for the email OTP login flow")
    )
)]
pub struct ApiDoc;
