// Infrastructure layer: dependency container and external store clients.

pub mod deps;
pub mod firebase_client;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use firebase_client::FirebaseRtdbClient;
pub use test_dependencies::InMemoryMirrorStore;
pub use traits::BaseMirrorStore;
