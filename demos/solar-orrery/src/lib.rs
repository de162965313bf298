use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod game;
mod placement;
use game::Orrery;

orrery_web::export_game!(Orrery, "solar-orrery");
