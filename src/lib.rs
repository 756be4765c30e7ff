// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod algorithms;   // the five graph algorithm strategies + factory
pub mod cli;          // ServerConfig parsing
pub mod concurrency;  // blocking queue, Active Object, Leader-Follower
pub mod errors;       // typed error enums
pub mod graph;        // Graph, Bitset, NeighborMasks, SeededRng
pub mod observability; // structured logging message types
pub mod protocol;     // wire-protocol header/edge-line parsing
pub mod request;      // Request, SendTask
pub mod server;       // Server: wires everything together
