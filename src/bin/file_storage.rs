use aviosync::core::config::Service;
use aviosync::core::server;

fn main() -> anyhow::Result<()> {
    server::run(Service::FileStorage)
}
