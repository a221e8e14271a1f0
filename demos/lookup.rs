//! Looks up records for domain names.
//!
//! Usage: lookup [@server] [+norec] [+type=TYPE] <name>...

use hermod_dns::base::{Name, Rtype};
use hermod_dns::rdata::{Aaaa, Cname, A};
use hermod_dns::resolv::{ResolvConf, ResolverClient, ServerDiscovery};
use std::env;
use std::net::IpAddr;
use std::str::FromStr;

fn forward(client: &ResolverClient, name: &Name, rtypes: &[Rtype]) {
    match client.query(name, rtypes) {
        Ok(response) => {
            for cname in response.answers_of::<Cname>() {
                println!("{} is an alias for {}", name, cname);
            }
            for addr in response.answers_of::<A>() {
                println!("{} has address {}", name, addr);
            }
            for addr in response.answers_of::<Aaaa>() {
                println!("{} has IPv6 address {}", name, addr);
            }
            for record in response.answers() {
                let data = record.data();
                let shown = data.downcast_ref::<A>().is_some()
                    || data.downcast_ref::<Aaaa>().is_some()
                    || data.downcast_ref::<Cname>().is_some();
                if !shown {
                    println!("{}", record);
                }
            }
            if response.answers().is_empty() {
                println!("{} has no records ({})", name, response.rcode());
            }
        }
        Err(err) => {
            println!("Error: {}", err);
        }
    }
}

fn main() {
    let mut conf = ResolvConf::system(ServerDiscovery::ALL);
    let mut rtypes = Vec::new();
    let mut names = Vec::new();
    for arg in env::args().skip(1) {
        if let Some(server) = arg.strip_prefix('@') {
            match IpAddr::from_str(server) {
                Ok(addr) => conf.servers.insert(0, (addr, 53).into()),
                Err(_) => println!("Warning: ignoring bad server {}", server),
            }
        } else if arg == "+norec" {
            conf.options.recurse = false
        } else if let Some(rtype) = arg.strip_prefix("+type=") {
            match Rtype::from_str(rtype) {
                Ok(rtype) => rtypes.push(rtype),
                Err(_) => println!("Warning: ignoring unknown type {}", rtype),
            }
        } else if arg.starts_with('+') {
            println!("Warning: ignoring unknown query option {}", arg);
        } else {
            names.push(arg)
        }
    }
    if names.is_empty() {
        println!("Usage: lookup [@server] [+norec] [+type=TYPE] <name>...");
        return;
    }
    if rtypes.is_empty() {
        rtypes.extend([Rtype::A, Rtype::AAAA]);
    }

    let client = ResolverClient::new(conf);
    for name in names {
        match Name::from_str(&name) {
            Ok(name) => {
                // Most servers only answer the first question.
                for rtype in &rtypes {
                    forward(&client, &name, &[*rtype]);
                }
            }
            Err(_) => println!("Not a domain name: {}", name),
        }
    }
}
