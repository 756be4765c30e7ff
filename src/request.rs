// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The two job types that flow through the concurrency fabric: a [`Request`] moves from
//! an acceptor thread to an algorithm's Active Object; a [`SendTask`] moves from there to
//! the sender Active Object.

use crate::algorithms::AlgoTag;
use crate::graph::Graph;
use std::net::TcpStream;

/// A fully parsed, validated request, owned exclusively by whichever worker currently
/// holds it. Rust's move semantics replace the reference's manual ownership-transfer
/// discipline across queues: once `submit`ted, nothing else can touch this value.
pub struct Request {
    pub socket: TcpStream,
    pub algorithm: AlgoTag,
    pub graph: Graph,
    pub prefix: Option<String>,
}

/// A fully materialized response, ready for the sender to write and the socket to close.
pub struct SendTask {
    pub socket: TcpStream,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;

    #[test]
    fn a_request_can_be_built_and_moved_with_a_real_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).unwrap();
        let (server_side, _) = listener.accept().unwrap();

        let request = Request {
            socket: server_side,
            algorithm: AlgoTag::Euler,
            graph: Graph::create(1).unwrap(),
            prefix: None,
        };
        assert_eq!(request.algorithm, AlgoTag::Euler);
        drop(client);
    }

    #[test]
    fn a_send_task_owns_the_socket_it_will_write_to() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let mut client = TcpStream::connect(addr).unwrap();
        let (server_side, _) = listener.accept().unwrap();

        let mut task = SendTask { socket: server_side, body: "hello\n".to_string() };
        std::io::Write::write_all(&mut task.socket, task.body.as_bytes()).unwrap();
        drop(task);

        let mut received = String::new();
        client.read_to_string(&mut received).unwrap();
        assert_eq!(received, "hello\n");
    }
}
