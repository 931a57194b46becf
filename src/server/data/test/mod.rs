mod booking;
mod cart_item;
mod destination;
mod menu;
mod order;
mod package;
mod setting;
mod translation;
mod user;
