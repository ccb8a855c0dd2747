//! One module per pattern. Each exposes `demo(&Console, &Settings)`.

pub mod adapter;
pub mod bridge;
pub mod chain;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod dependency_inversion;
pub mod facade;
pub mod factory;
pub mod flyweight;
pub mod intercepting_filter;
pub mod inversion_of_control;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod open_closed;
pub mod prototype;
pub mod proxy;
pub mod service_locator;
pub mod state;
pub mod strategy;
pub mod visitor;
