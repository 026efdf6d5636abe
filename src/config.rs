//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivo único.
//! Los dos argumentos posicionales (archivo y puerto) vienen de la línea
//! de comandos; el resto son opciones de ajuste fino.
//!
//! ## Ejemplos de uso
//!
//! ```bash
//! ./file_server index.html 6789
//! ./file_server /index.html 6789 --strip-leading-slash
//! ./file_server index.html 6789 --host 127.0.0.1 --read-timeout-ms 5000
//! ```

use clap::Parser;

/// Configuración del servidor TCP de archivo único
#[derive(Debug, Clone, Parser)]
#[command(name = "file_server")]
#[command(about = "Servidor TCP de archivo único para Redes de Computadoras")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Ruta del archivo que se sirve en cada conexión
    pub file_name: String,

    /// Puerto TCP en el que escucha el servidor
    pub port: u16,

    /// Host/IP en el que escucha
    ///
    /// El programa original resolvía el hostname de la máquina; aquí
    /// escuchamos en todas las interfaces por defecto.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Quita el primer carácter de la ruta antes de abrir el archivo
    ///
    /// Reproduce la convención del programa original, que recibía rutas
    /// con `/` inicial y las abría en forma relativa. Por defecto la ruta
    /// se usa tal cual.
    #[arg(long = "strip-leading-slash")]
    pub strip_leading_slash: bool,

    /// Timeout de lectura por conexión en milisegundos (0 = sin timeout)
    #[arg(long = "read-timeout-ms", default_value = "0")]
    pub read_timeout_ms: u64,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:6789");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        // Validar puerto
        if self.port == 0 {
            return Err("Port must be >= 1".to_string());
        }

        // Validar ruta del archivo
        if self.file_name.is_empty() {
            return Err("File name must not be empty".to_string());
        }

        // Con strip habilitado la ruta necesita al menos dos caracteres,
        // si no quedaría vacía al abrirla
        if self.strip_leading_slash && self.file_name.chars().count() < 2 {
            return Err("File name too short to strip its first character".to_string());
        }

        // Validar host
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║          File Server Configuration           ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:       {}", self.address());
        println!();
        println!("📄 File:");
        println!("   Path:          {}", self.file_name);
        println!("   Strip slash:   {}", if self.strip_leading_slash { "yes" } else { "no" });
        println!();
        println!("⏱️  Timeouts:");

        if self.read_timeout_ms > 0 {
            println!("   Read timeout:  {} ms", self.read_timeout_ms);
        } else {
            println!("   Read timeout:  disabled");
        }

        println!();
        println!("════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            file_name: "index.html".to_string(),
            port: 6789,
            host: "0.0.0.0".to_string(),
            strip_leading_slash: false,
            read_timeout_ms: 0,
        }
    }
}
