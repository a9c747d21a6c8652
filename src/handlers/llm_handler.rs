use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateQuizRequest, GenerateReedRequest},
        response::{QuizResponse, ReedResponse},
    },
};

#[post("/api/llm/generate")]
pub async fn generate_reed(
    state: web::Data<AppState>,
    request: web::Json<GenerateReedRequest>,
) -> Result<HttpResponse, AppError> {
    let reed = state.reed_service.generate_reed(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ReedResponse::from(reed)))
}

#[post("/api/llm/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(QuizResponse::new(questions)))
}
