// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The five graph algorithms and the strategy/factory layer that dispatches to them.

pub mod count_cliques;
pub mod euler;
pub mod factory;
pub mod hamilton;
pub mod max_clique;
pub mod mst;
pub mod strategy;

pub use factory::strategy_for;
pub use strategy::{AlgoTag, Strategy};
