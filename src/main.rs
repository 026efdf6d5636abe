//! # File Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivo único.
//!
//! Parsea los argumentos (archivo y puerto), valida, imprime el resumen
//! de configuración y entra al loop de atención.

use file_server::config::Config;
use file_server::server::Server;
use file_server::storage::FileSource;

fn main() {
    println!("=================================");
    println!("  TCP Single-File Server");
    println!("  Redes de Computadoras");
    println!("=================================\n");

    // Crear configuración desde los argumentos CLI
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Reporte inicial del archivo objetivo; si falta no es fatal,
    // cada conexión reintenta la lectura
    FileSource::from_config(&config).preflight();
    println!();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
