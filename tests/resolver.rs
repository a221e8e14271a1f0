mod common;

use common::{init_logging, record, respond, FakeServer};
use hermod_dns::base::iana::{Rcode, Rtype};
use hermod_dns::base::Name;
use hermod_dns::rdata::{Aaaa, Mx, Txt, A};
use hermod_dns::resolv::{Error, ProtocolError, ResolverClient};
use rstest::rstest;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const EXAMPLE_A: &[u8] = &[93, 184, 216, 34];

fn client(server: &FakeServer) -> ResolverClient {
    let mut client = ResolverClient::from_socket_addrs([server.addr()]);
    client.set_timeout(Duration::from_secs(5));
    client
}

fn example() -> Name {
    Name::from_str("example.com").unwrap()
}

#[test]
fn query_address() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        Some(respond(query, [1, 0, 0], &record(1, 3600, EXAMPLE_A)))
    });
    let addrs = client(&server).query_typed::<A>(&example()).unwrap();
    assert_eq!(addrs, vec![A::new(Ipv4Addr::new(93, 184, 216, 34))]);
}

#[test]
fn query_times_out() {
    init_logging();
    let server = FakeServer::start(1, |_| None);
    let mut client = client(&server);
    client.set_timeout(Duration::from_millis(200));

    let start = Instant::now();
    let res = client.query(&example(), &[Rtype::A]);
    assert!(matches!(res, Err(Error::Timeout)), "{:?}", res);
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn query_first_without_match() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        Some(respond(query, [1, 0, 0], &record(1, 3600, EXAMPLE_A)))
    });
    assert_eq!(client(&server).query_first::<Mx>(&example()).unwrap(), None);
}

#[test]
fn unknown_type_is_kept() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        let mut records = record(65, 300, b"\x00\x01\x00\x00");
        records.extend(record(1, 3600, EXAMPLE_A));
        Some(respond(query, [2, 0, 0], &records))
    });
    let response = client(&server).query(&example(), &[Rtype::A]).unwrap();
    let answers = response.answers();
    assert_eq!(answers.len(), 2);

    let unknown = answers[0].data().unknown().unwrap();
    assert_eq!(unknown.rtype(), Rtype::from_int(65));
    assert_eq!(unknown.data().as_ref(), b"\x00\x01\x00\x00");
    assert_eq!(
        answers[1].data_as::<A>().map(A::addr),
        Some(Ipv4Addr::new(93, 184, 216, 34))
    );
}

#[test]
fn bad_record_length_aborts() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        // An A record with five octets of data.
        Some(respond(query, [1, 0, 0], &record(1, 3600, b"\x5d\xb8\xd8\x22\x00")))
    });
    let res = client(&server).query(&example(), &[Rtype::A]);
    assert!(
        matches!(res, Err(Error::Protocol(ProtocolError::Malformed(_)))),
        "{:?}",
        res
    );
}

#[test]
fn compression_loop_fails() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        // A CNAME pointing at itself.
        let offset = query.len() + 12;
        let data = [0xc0 | (offset >> 8) as u8, offset as u8];
        Some(respond(query, [1, 0, 0], &record(5, 3600, &data)))
    });
    let res = client(&server).query(&example(), &[Rtype::CNAME]);
    assert!(matches!(res, Err(Error::Format(_))), "{:?}", res);
}

#[test]
fn mismatched_id_is_rejected() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        let mut res = respond(query, [0, 0, 0], b"");
        res[0] ^= 0xff;
        Some(res)
    });
    let res = client(&server).query(&example(), &[Rtype::A]);
    assert!(
        matches!(res, Err(Error::Protocol(ProtocolError::IdMismatch))),
        "{:?}",
        res
    );
}

#[test]
fn error_rcode_is_reported() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        let mut res = respond(query, [0, 0, 0], b"");
        res[3] |= 0x03;
        Some(res)
    });
    let response = client(&server).query(&example(), &[Rtype::A]).unwrap();
    assert_eq!(response.rcode(), Rcode::NXDOMAIN);
    assert!(response.answers().is_empty());
}

#[test]
fn several_types() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        assert_eq!(&query[4..6], b"\x00\x02");
        let mut records = record(1, 3600, EXAMPLE_A);
        records.extend(record(28, 3600, &[0x20, 1, 0xd, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
        Some(respond(query, [2, 0, 0], &records))
    });
    let response = client(&server)
        .query(&example(), &[Rtype::A, Rtype::AAAA])
        .unwrap();
    assert_eq!(response.questions().len(), 2);
    assert_eq!(response.answers_of::<A>().count(), 1);
    assert_eq!(
        response.answers_of::<Aaaa>().next().map(|aaaa| aaaa.to_string()),
        Some("2001:db8::1".into())
    );
}

#[test]
fn concurrent_queries() {
    init_logging();
    let server = FakeServer::start(8, |query| {
        Some(respond(query, [1, 0, 0], &record(1, 3600, EXAMPLE_A)))
    });
    let client = Arc::new(client(&server));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            thread::spawn(move || client.query_first::<A>(&example()))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().unwrap().is_some());
    }
}

#[rstest]
#[case::mx(15, b"\x00\x0a\x04mail\xc0\x0c", "example.com. 3600 IN MX 10 mail.example.com.")]
#[case::txt(16, b"\x0bhello world", "example.com. 3600 IN TXT \"hello world\"")]
#[case::cname(5, b"\x03www\xc0\x0c", "example.com. 3600 IN CNAME www.example.com.")]
#[case::srv(33, b"\x00\x01\x00\x02\x00\x35\xc0\x0c", "example.com. 3600 IN SRV 1 2 53 example.com.")]
#[case::unknown(99, b"\xde\xad", "example.com. 3600 IN TYPE99 \\# 2 de ad")]
fn record_display(
    #[case] rtype: u16,
    #[case] data: &'static [u8],
    #[case] expected: &str,
) {
    init_logging();
    let server = FakeServer::start(1, move |query| {
        Some(respond(query, [1, 0, 0], &record(rtype, 3600, data)))
    });
    let response = client(&server)
        .query(&example(), &[Rtype::from_int(rtype)])
        .unwrap();
    assert_eq!(response.answers()[0].to_string(), expected);
}

#[test]
fn typed_txt() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        Some(respond(query, [1, 0, 0], &record(16, 60, b"\x03foo\x03bar")))
    });
    let txt = client(&server).query_first::<Txt>(&example()).unwrap().unwrap();
    assert_eq!(txt.text(), b"foobar");
}

#[cfg(feature = "tokio")]
#[tokio::test]
async fn query_async() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        Some(respond(query, [1, 0, 0], &record(1, 3600, EXAMPLE_A)))
    });
    let response = client(&server)
        .query_async(&example(), &[Rtype::A])
        .await
        .unwrap();
    assert_eq!(
        response.answers_of::<A>().next(),
        Some(&A::from_octets(93, 184, 216, 34))
    );
}

#[cfg(feature = "serde")]
#[test]
fn serialize_response() {
    init_logging();
    let server = FakeServer::start(1, |query| {
        Some(respond(query, [1, 0, 0], &record(1, 3600, EXAMPLE_A)))
    });
    let response = client(&server).query(&example(), &[Rtype::A]).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["id"], response.id());
    assert_eq!(json["answers"][0]["owner"], "example.com");
    assert_eq!(json["answers"][0]["ttl"], 3600);
}
