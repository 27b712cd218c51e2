/// GET /api/healthz
pub async fn healthz() -> &'static str {
    "OK"
}
