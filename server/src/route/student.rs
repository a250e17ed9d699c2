use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{
    CreateStudentService, DeleteStudentService, GetRentalService, GetStudentService,
    UpdateCardStatusService, UpdateStudentService,
};
use application::transfer::{DeleteStudentDto, GetStudentDto, GetStudentRentalsDto};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::rental::response::RentalResponse;
use crate::route::student::request::{
    CreateStudentRequest, GetAllStudentRequest, UpdateCardStatusRequest, UpdateStudentRequest,
};
use crate::route::student::response::{IdCardResponse, StudentResponse};

pub mod request;
pub mod response;

pub trait StudentRouter {
    fn route_student(self) -> Self;
}

impl StudentRouter for Router<AppModule> {
    fn route_student(self) -> Self {
        self.route(
            "/students",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetAllStudentRequest>| async move {
                    module
                        .pgpool()
                        .get_all_students(req.into())
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|students| {
                            Json(
                                students
                                    .into_iter()
                                    .map(StudentResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateStudentRequest>| async move {
                    module
                        .pgpool()
                        .create_student(req.into())
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|student| (StatusCode::CREATED, Json(StudentResponse::from(student))))
                },
            ),
        )
        .route(
            "/students/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .pgpool()
                        .get_student(GetStudentDto { id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|student| {
                            student
                                .map(|student| StudentResponse::from(student).into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateStudentRequest>| async move {
                    module
                        .pgpool()
                        .update_student(req.into_dto(id))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|student| {
                            student
                                .map(|student| StudentResponse::from(student).into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .pgpool()
                        .delete_student(DeleteStudentDto { id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|()| StatusCode::NO_CONTENT)
                },
            ),
        )
        .route(
            "/students/:id/card",
            patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateCardStatusRequest>| async move {
                    module
                        .pgpool()
                        .update_card_status(req.into_dto(id))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|card| {
                            card.map(|card| IdCardResponse::from(card).into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
        .route(
            "/students/:id/rentals",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .pgpool()
                        .get_student_rentals(GetStudentRentalsDto { student_id: id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|rentals| {
                            Json(
                                rentals
                                    .into_iter()
                                    .map(RentalResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                },
            ),
        )
    }
}
