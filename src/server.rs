// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wires the listening socket, the Leader–Follower acceptor pool, the five algorithm
//! Active Objects, and the sender Active Object into a running server.

use crate::algorithms::{strategy_for, AlgoTag, Strategy};
use crate::cli::ServerConfig;
use crate::concurrency::{ActiveObject, LeaderFollower};
use crate::errors::ServerError;
use crate::observability::messages::{
    algorithm::AlgorithmCompleted,
    connection::{ConnectionAccepted, RequestRejected},
    dispatch::RequestDispatched,
    sender::{ResponseSent, SendFailed},
    StructuredLog,
};
use crate::protocol;
use crate::request::{Request, SendTask};
use std::collections::HashMap;
use std::io::{BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// The process-lifetime value replacing the reference's process-global statics: the
/// listening socket, the Leader–Follower coordinator, and the six Active Objects.
pub struct Server {
    listener: TcpListener,
    leader_follower: Arc<LeaderFollower>,
    algorithm_objects: HashMap<AlgoTag, ActiveObject<Request>>,
    acceptor_threads: usize,
}

impl Server {
    /// Binds the listening socket and spawns the sender and algorithm Active Objects.
    /// None of the spawned threads are joined; they run for the life of the process.
    pub fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let listener =
            TcpListener::bind(("0.0.0.0", config.port)).map_err(|source| ServerError::SocketSetup {
                port: config.port,
                source,
            })?;

        let sender = Arc::new(ActiveObject::spawn("sender", send_response));

        let mut algorithm_objects = HashMap::new();
        for tag in [
            AlgoTag::Euler,
            AlgoTag::Mst,
            AlgoTag::MaxClique,
            AlgoTag::CountClq3p,
            AlgoTag::Hamilton,
        ] {
            let strategy: Box<dyn Strategy> = strategy_for(tag);
            let sender_handle = Arc::clone(&sender);
            let active_object = ActiveObject::spawn(tag.as_str(), move |request: Request| {
                run_algorithm_job(strategy.as_ref(), request, &sender_handle);
            });
            algorithm_objects.insert(tag, active_object);
        }

        Ok(Self {
            listener,
            leader_follower: Arc::new(LeaderFollower::new()),
            algorithm_objects,
            acceptor_threads: config.threads,
        })
    }

    /// Spawns the configured number of acceptor threads and blocks forever, mirroring
    /// the reference's `for(;;) pause();` — this function never returns.
    pub fn run(self) -> ! {
        let server = Arc::new(self);
        for i in 0..server.acceptor_threads {
            let server = Arc::clone(&server);
            thread::Builder::new()
                .name(format!("acceptor-{i}"))
                .spawn(move || server.acceptor_loop())
                .expect("failed to spawn acceptor thread");
        }
        loop {
            thread::park();
        }
    }

    fn acceptor_loop(&self) {
        loop {
            self.leader_follower.become_leader();
            let accepted = self.listener.accept();
            self.leader_follower.resign_leadership();

            match accepted {
                Ok((stream, addr)) => self.handle_connection(stream, addr),
                Err(_) => continue,
            }
        }
    }

    fn handle_connection(&self, mut stream: TcpStream, addr: SocketAddr) {
        let peer = addr.to_string();
        ConnectionAccepted { peer: &peer }.log();

        let parsed = {
            let mut reader = BufReader::new(&stream);
            protocol::read_request(&mut reader)
        };

        match parsed {
            Ok((header, graph)) => {
                let prefix = header.show_prefix.then(|| graph.adjacency_prefix());
                RequestDispatched {
                    algorithm: header.tag.as_str(),
                    vertex_count: graph.vertex_count(),
                    edge_count: graph.edge_count(),
                }
                .log();

                let request = Request { socket: stream, algorithm: header.tag, graph, prefix };
                self.algorithm_objects[&header.tag].submit(request);
            }
            Err(parse_error) => {
                let reason = parse_error.to_string();
                RequestRejected { peer: &peer, reason: &reason }.log();
                let _ = stream.write_all(parse_error.to_wire_line().as_bytes());
            }
        }
    }
}

fn run_algorithm_job(strategy: &dyn Strategy, request: Request, sender: &ActiveObject<SendTask>) {
    let started = Instant::now();
    let mut body = strategy.execute(&request.graph);
    if let Some(prefix) = &request.prefix {
        body = format!("{prefix}{body}");
    }

    AlgorithmCompleted {
        algorithm: request.algorithm.as_str(),
        duration: started.elapsed(),
        outcome: "completed",
    }
    .log();

    sender.submit(SendTask { socket: request.socket, body });
}

/// The sender Active Object's handler: the sole writer of any client socket, honoring
/// partial writes and `EINTR` via `write_all`'s built-in retry, then closing on drop.
fn send_response(mut task: SendTask) {
    let peer = task
        .socket
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());

    match task.socket.write_all(task.body.as_bytes()) {
        Ok(()) => ResponseSent { peer: &peer, bytes_written: task.body.len() }.log(),
        Err(error) => SendFailed { peer: &peer, error: &error }.log(),
    }
}
