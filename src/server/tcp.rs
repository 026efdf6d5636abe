//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Implementación del loop de atención: acepta una conexión a la vez,
//! lee lo que el cliente haya mandado (sin interpretarlo) y responde con
//! los bytes del archivo configurado.
//!
//! ## Ciclo por conexión
//!
//! ```text
//! accept → read (≤ 4096 bytes) → leer archivo → write_all → close
//!                                     │
//!                                     └─ error de I/O → log, close, seguir
//! ```
//!
//! Solo la lectura del archivo está protegida; un error de socket en
//! accept/read/write sale del loop como `io::Error` y termina el proceso.

use crate::config::Config;
use crate::metrics::ServerMetrics;
use crate::storage::FileSource;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::time::Duration;

/// Tamaño máximo del request que se lee por conexión
const REQUEST_BUFFER_SIZE: usize = 4096;

/// Resultado de un intercambio con un cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// El archivo se envió completo (bytes escritos)
    Served(u64),

    /// El archivo no se pudo leer; el cliente no recibió nada
    FileError,

    /// El cliente no mandó nada dentro del timeout de lectura
    TimedOut,
}

/// Servidor de archivo único, secuencial y bloqueante
pub struct Server {
    config: Config,
    source: FileSource,
    metrics: ServerMetrics,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let source = FileSource::from_config(&config);

        Self {
            config,
            source,
            metrics: ServerMetrics::new(),
            listener: None,
        }
    }

    /// Enlaza el socket de escucha a la dirección configurada
    ///
    /// El backlog queda en el valor por defecto del sistema operativo;
    /// `std::net::TcpListener` no expone ese parámetro.
    pub fn bind(&mut self) -> io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo secuencial: una conexión a la vez\n");

        self.listener = Some(listener);
        Ok(())
    }

    /// Dirección local real del socket de escucha
    ///
    /// Útil cuando se enlaza al puerto 0 y el sistema asigna uno libre.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Enlaza y entra al loop de atención
    pub fn run(&mut self) -> io::Result<()> {
        self.bind()?;
        self.serve_forever()
    }

    /// Loop de atención sin condición de término
    ///
    /// Corre hasta que el proceso muera o un error de socket lo saque.
    /// Requiere un listener ya enlazado con [`Server::bind`].
    pub fn serve_forever(&mut self) -> io::Result<()> {
        let listener = match &self.listener {
            Some(l) => l,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotConnected,
                    "listener not bound, call bind() first",
                ));
            }
        };

        let read_timeout = if self.config.read_timeout_ms > 0 {
            Some(Duration::from_millis(self.config.read_timeout_ms))
        } else {
            None
        };

        loop {
            println!("[*] Listo para servir...");

            // Bloquea hasta que llegue un cliente
            let (stream, peer) = listener.accept()?;
            println!("   🔌 Conexión desde {}", peer);

            match Self::handle_connection(stream, &self.source, read_timeout)? {
                Exchange::Served(bytes) => self.metrics.record_served(bytes),
                Exchange::FileError => self.metrics.record_failed(),
                Exchange::TimedOut => {}
            }

            println!("   📊 Métricas: {}\n", self.metrics.to_json());
        }
    }

    /// Atiende un intercambio completo con un cliente
    ///
    /// El stream se cierra al salir de la función en todos los caminos,
    /// éxito o error: el handle vive dentro de este scope.
    fn handle_connection(
        mut stream: TcpStream,
        source: &FileSource,
        read_timeout: Option<Duration>,
    ) -> io::Result<Exchange> {
        if read_timeout.is_some() {
            stream.set_read_timeout(read_timeout)?;
        }

        // Leer el request: cualquier contenido es aceptable, incluso
        // ninguno. Solo se registra, nunca se parsea.
        let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
        let bytes_read = match stream.read(&mut buffer) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock
                || e.kind() == io::ErrorKind::TimedOut =>
            {
                println!("   ⏱️  Timeout esperando el request, se abandona la conexión");
                return Ok(Exchange::TimedOut);
            }
            Err(e) => return Err(e),
        };
        println!("   ✅ Request de {} bytes", bytes_read);

        // Única rama de error contemplada: si el archivo no se puede
        // leer, el cliente no recibe nada y el loop sigue
        println!("   📄 Sirviendo archivo: {}", source.resolved_path());
        let contents = match source.read() {
            Ok(data) => data,
            Err(e) => {
                eprintln!("   ❌ Error al leer el archivo: {}", e);
                return Ok(Exchange::FileError);
            }
        };

        // Enviar el contenido completo de una vez
        stream.write_all(&contents)?;
        stream.flush()?;
        println!("   ✅ {} bytes enviados", contents.len());

        Ok(Exchange::Served(contents.len() as u64))
    }
}
