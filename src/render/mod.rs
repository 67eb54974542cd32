//! SQL script rendering.
//!
//! Turns accepted records into the bulk-import script: one quoted `VALUES`
//! tuple per record, embedded in a fixed header/footer template carrying the
//! state-check and post-import verification queries. The template is injected
//! at render time so the script layout can be tested independently of the
//! data; [`SqlTemplate::default`] reproduces the layout the downstream import
//! expects.

use crate::models::ProductRecord;

/// Leading comment block and state-check query.
pub const DEFAULT_HEADER: &str = r#"-- Script generado automáticamente para importar TODOS los productos del archivo producto.txt
-- Esto asegurará que tengamos los 1432 productos en la base de datos

-- 1. Verificar estado actual
SELECT
    'ESTADO ACTUAL' as tipo,
    COUNT(*) as total_productos,
    SUM(CASE WHEN activo = true THEN 1 ELSE 0 END) as productos_activos,
    SUM(CASE WHEN activo = false THEN 1 ELSE 0 END) as productos_inactivos
FROM productos;

-- 2. LIMPIAR productos existentes (opcional - solo si quieres empezar de cero)
-- DELETE FROM productos;

"#;

/// `INSERT INTO ... VALUES` preamble, emitted only when at least one record
/// exists (an empty `VALUES` list is not valid SQL).
pub const DEFAULT_INSERT: &str = r#"-- 3. IMPORTAR TODOS los productos del archivo producto.txt
INSERT INTO productos (nombre, codigo_sku, categoria, stock, precio_minorista, precio_mayorista, descripcion, unidad_medida, activo)
VALUES
"#;

/// Conflict policy closing the insert; SKU is the natural key downstream.
pub const DEFAULT_CONFLICT: &str = r#"
ON CONFLICT (codigo_sku) DO NOTHING;
"#;

/// Post-import verification queries.
pub const DEFAULT_FOOTER: &str = r#"
-- 4. Verificar estado después de la importación
SELECT
    'ESTADO POST IMPORTACION' as tipo,
    COUNT(*) as total_productos,
    SUM(CASE WHEN activo = true THEN 1 ELSE 0 END) as productos_activos,
    SUM(CASE WHEN activo = false THEN 1 ELSE 0 END) as productos_inactivos
FROM productos;

-- 5. Verificar productos activos por categoría
SELECT
    'PRODUCTOS POR CATEGORIA' as tipo,
    categoria,
    COUNT(*) as cantidad
FROM productos
WHERE activo = true
GROUP BY categoria
ORDER BY cantidad DESC;

-- 6. Verificar productos con "moura" en el nombre
SELECT
    'PRODUCTOS MOURA' as tipo,
    id,
    nombre,
    codigo_sku,
    categoria,
    stock,
    activo
FROM productos
WHERE LOWER(nombre) LIKE '%moura%'
ORDER BY nombre;
"#;

/// Fixed text surrounding the generated tuples, injected at render time.
#[derive(Debug, Clone)]
pub struct SqlTemplate {
    /// Leading comment block and state-check query.
    pub header: String,
    /// Insert preamble, up to and including the `VALUES` keyword.
    pub insert: String,
    /// Conflict policy closing the insert.
    pub conflict: String,
    /// Post-import verification queries.
    pub footer: String,
}

impl Default for SqlTemplate {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            insert: DEFAULT_INSERT.to_string(),
            conflict: DEFAULT_CONFLICT.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl SqlTemplate {
    /// Render the complete script around the given tuples.
    ///
    /// With zero tuples the insert block and conflict clause are omitted
    /// entirely, leaving a template-complete script with only the state-check
    /// and verification queries.
    pub fn render(&self, tuples: &[String]) -> String {
        if tuples.is_empty() {
            return format!("{}{}", self.header, self.footer);
        }
        format!(
            "{}{}{}{}{}",
            self.header,
            self.insert,
            tuples.join(",\n"),
            self.conflict,
            self.footer
        )
    }
}

/// Double embedded single quotes; the only escaping the script needs.
pub fn escape_str(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render one `VALUES` tuple for a record.
///
/// Text fields are single-quoted and escaped, integers are bare, and the
/// active flag renders as the lowercase boolean literal. The four-space
/// indent is part of the tuple text.
pub fn render_tuple(record: &ProductRecord) -> String {
    format!(
        "    ('{}', '{}', '{}', {}, {}, {}, '{}', '{}', {})",
        escape_str(&record.name),
        escape_str(&record.sku),
        escape_str(&record.category),
        record.stock,
        record.retail_price,
        record.wholesale_price,
        escape_str(&record.description),
        escape_str(&record.unit),
        record.active,
    )
}
