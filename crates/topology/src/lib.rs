pub use topology_config::TopologyConfig;

mod topology_config;
