use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::distance_rates::models::TaxReclaimableForm;
use crate::modules::distance_rates::services::distance_rate_service::DistanceRateService;

/// Read the tax-reclaimable display value for one distance rate
/// GET /policies/{policy_id}/distance-rates/{rate_id}/tax-reclaimable
pub async fn get_tax_reclaimable(
    service: web::Data<Arc<DistanceRateService>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (policy_id, rate_id) = path.into_inner();
    let view = service.get_tax_reclaimable(&policy_id, &rate_id).await?;

    Ok(HttpResponse::Ok().json(view))
}

/// Submit an edited tax-reclaimable value for one distance rate
/// PUT /policies/{policy_id}/distance-rates/{rate_id}/tax-reclaimable
pub async fn update_tax_reclaimable(
    service: web::Data<Arc<DistanceRateService>>,
    path: web::Path<(String, String)>,
    form: web::Json<TaxReclaimableForm>,
) -> Result<HttpResponse, AppError> {
    let (policy_id, rate_id) = path.into_inner();
    let updated = service
        .submit_tax_reclaimable(&policy_id, &rate_id, form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Configure distance rate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/policies/{policy_id}/distance-rates/{rate_id}/tax-reclaimable")
            .route(web::get().to(get_tax_reclaimable))
            .route(web::put().to(update_tax_reclaimable)),
    );
}
