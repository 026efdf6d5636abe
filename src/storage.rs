//! # Acceso al Archivo Objetivo
//! src/storage.rs
//!
//! El servidor sirve siempre el mismo archivo, configurado al arranque.
//! Este módulo encapsula la convención de ruta y la lectura completa del
//! archivo a memoria, que se repite en cada conexión.

use crate::config::Config;
use std::fs;
use std::io;

/// Fuente del archivo que se sirve en cada conexión
///
/// La ruta nunca cambia durante la vida del proceso; el contenido se relee
/// del disco en cada request, así que editar el archivo entre conexiones
/// se refleja en la siguiente respuesta.
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Ruta tal como llegó por CLI
    path: String,

    /// Si se quita el primer carácter antes de abrir
    strip_leading: bool,
}

impl FileSource {
    /// Crea una fuente a partir de una ruta y la convención de apertura
    pub fn new(path: &str, strip_leading: bool) -> Self {
        Self {
            path: path.to_string(),
            strip_leading,
        }
    }

    /// Crea la fuente desde la configuración del servidor
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.file_name, config.strip_leading_slash)
    }

    /// Ruta que realmente se abre
    ///
    /// Con `strip_leading` activo se descarta el primer carácter, como
    /// hacía el programa original con el `/` inicial. Sin él, la ruta se
    /// usa tal cual.
    pub fn resolved_path(&self) -> &str {
        if self.strip_leading {
            match self.path.chars().next() {
                Some(first) => &self.path[first.len_utf8()..],
                None => "",
            }
        } else {
            &self.path
        }
    }

    /// Lee el contenido completo del archivo
    ///
    /// # Errores
    ///
    /// Retorna el error de I/O tal cual (archivo inexistente, sin
    /// permisos, etc.); el caller decide qué hacer con él.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(self.resolved_path())
    }

    /// Reporte inicial del archivo objetivo
    ///
    /// Se ejecuta una sola vez al arrancar: si el archivo se puede leer,
    /// imprime su tamaño y hash SHA256 para poder verificar después qué
    /// se estuvo sirviendo. Si no se puede leer solo avisa; el error por
    /// conexión se maneja en el loop del servidor.
    pub fn preflight(&self) {
        println!("[*] Verificando archivo objetivo: {}", self.resolved_path());

        match self.read() {
            Ok(data) => {
                println!("   ✅ Archivo disponible: {} bytes", data.len());
                println!("      SHA256: {}", sha256_hex(&data));
            }
            Err(e) => {
                println!("   ⚠️  Archivo no disponible: {}", e);
                println!("      El servidor arranca igual; cada conexión reintenta la lectura");
            }
        }
    }
}

/// Calcula el hash SHA256 de un buffer en memoria
fn sha256_hex(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
