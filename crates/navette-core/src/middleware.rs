use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};

/// Build the `x-request-id` layer. Apply with `.layer(request_id_layer())`
/// in each service router so log lines correlate across services.
pub fn request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}
