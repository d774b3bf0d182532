use crate::booking::{BookingOutcome, BookingStore, CheckoutOutcome};
use crate::context::ApplicationContext;
use crate::room::model::RoomNumber;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::models::{
	AddRoomRequest, AvailabilityResponse, BookingRequest, CustomerResponse, OperationResponse, RoomResponse,
};
use crate::server::rest_api::response::Created;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

pub mod error;
pub mod models;
pub mod response;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.route("/rooms", get(list_rooms).post(add_room))
		.route("/rooms/{room_number}/availability", get(check_availability))
		.route("/rooms/{room_number}/checkout", post(checkout))
		.route("/bookings", post(book_room))
		.route("/customers", get(list_customers))
}

async fn list_rooms(State(store): State<BookingStore>) -> Result<Json<Vec<RoomResponse>>, ApiErrorResponse> {
	let rooms = store.list_rooms().await?;
	Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

async fn add_room(
	State(store): State<BookingStore>,
	Json(request): Json<AddRoomRequest>,
) -> Result<Created<Json<RoomResponse>>, ApiErrorResponse> {
	let room = store
		.add_room(request.room_number, &request.room_type, request.price)
		.await?;
	Ok(Created(Json(room.into())))
}

async fn check_availability(
	State(store): State<BookingStore>,
	Path(room_number): Path<RoomNumber>,
) -> Result<Json<AvailabilityResponse>, ApiErrorResponse> {
	match store.check_availability(room_number).await? {
		Some(available) => Ok(Json(AvailabilityResponse {
			room_number: room_number.into(),
			available,
		})),
		None => Err(ApiErrorResponse::room_not_found(format!("Room {room_number} does not exist."))),
	}
}

async fn book_room(
	State(store): State<BookingStore>,
	Json(request): Json<BookingRequest>,
) -> Result<Json<OperationResponse>, ApiErrorResponse> {
	let outcome = store
		.book_room(&request.name, &request.contact, request.room_number)
		.await?;

	match outcome {
		BookingOutcome::Booked(_) => Ok(Json(OperationResponse::success(&outcome))),
		BookingOutcome::RoomNotFound(_) => Err(ApiErrorResponse::room_not_found(outcome.to_string())),
		BookingOutcome::RoomOccupied(_) => Err(ApiErrorResponse::conflict("room-occupied", outcome.to_string())),
	}
}

async fn list_customers(
	State(store): State<BookingStore>,
) -> Result<Json<Vec<CustomerResponse>>, ApiErrorResponse> {
	let customers = store.list_customers().await?;
	Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

async fn checkout(
	State(store): State<BookingStore>,
	Path(room_number): Path<RoomNumber>,
) -> Result<Json<OperationResponse>, ApiErrorResponse> {
	let outcome = store.checkout(room_number).await?;

	match outcome {
		CheckoutOutcome::CheckedOut(_) => Ok(Json(OperationResponse::success(&outcome))),
		CheckoutOutcome::RoomNotFound(_) => Err(ApiErrorResponse::room_not_found(outcome.to_string())),
		CheckoutOutcome::RoomVacant(_) => Err(ApiErrorResponse::conflict("room-vacant", outcome.to_string())),
	}
}
