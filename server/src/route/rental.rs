use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{GetRentalService, RentBookService, ReturnBookService};
use application::transfer::{GetRentalDto, ReturnBookDto};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::rental::request::RentBookRequest;
use crate::route::rental::response::RentalResponse;

pub mod request;
pub mod response;

pub trait RentalRouter {
    fn route_rental(self) -> Self;
}

impl RentalRouter for Router<AppModule> {
    fn route_rental(self) -> Self {
        self.route(
            "/rentals",
            post(
                |State(module): State<AppModule>, Json(req): Json<RentBookRequest>| async move {
                    module
                        .pgpool()
                        .rent_book(req.into())
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|rental| (StatusCode::CREATED, Json(RentalResponse::from(rental))))
                },
            ),
        )
        .route(
            "/rentals/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .pgpool()
                        .get_rental(GetRentalDto { id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|rental| {
                            rental
                                .map(|rental| RentalResponse::from(rental).into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .put(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .pgpool()
                        .return_book(ReturnBookDto { rental_id: id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|rental| Json(RentalResponse::from(rental)))
                },
            ),
        )
    }
}
