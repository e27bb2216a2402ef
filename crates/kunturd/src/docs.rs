//! Static documentation page served at the API root.

use std::sync::Arc;

use axum::{response::Html, routing::get, Router};

use crate::server::AppState;

pub fn docs_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}

async fn home() -> Html<&'static str> {
    Html(DOCS_HTML)
}

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Kuntur Detector API</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; padding: 20px; max-width: 800px; margin: 0 auto; }
        h1 { color: #333; }
        h2 { color: #444; margin-top: 20px; }
        .endpoint { border: 1px solid #ddd; padding: 10px; margin: 10px 0; border-radius: 5px; }
        .method { font-weight: bold; color: #008000; }
        .path { font-family: monospace; }
        .note { background-color: #f8f9fa; padding: 10px; border-left: 4px solid #007bff; margin: 15px 0; }
    </style>
</head>
<body>
    <h1>Kuntur Detector API</h1>
    <p>API para la gestión de casos de UPC Ecuador</p>

    <div class="note">
        <p><strong>Nota:</strong> Esta API tiene habilitado CORS para permitir solicitudes
        desde cualquier origen, lo que facilita la integración con clientes web y móviles.</p>
    </div>

    <h2>Endpoints disponibles:</h2>

    <div class="endpoint">
        <p><span class="method">GET</span> <span class="path">/healthcheck</span></p>
        <p>Verificar estado del servidor</p>
        <p>Respuesta: <code>{"status": "ok", "timestamp": "2025-07-23T10:30:15Z"}</code></p>
    </div>

    <div class="endpoint">
        <p><span class="method">POST</span> <span class="path">/api/casos</span></p>
        <p>Crear un nuevo caso</p>
        <p>Campos requeridos:</p>
        <ul>
            <li><code>id_alarma</code>: ID de la alerta asociada</li>
            <li><code>nombre_agente</code>: Nombre del agente que registra el caso</li>
            <li><code>cedula_agente</code>: Cédula del agente</li>
            <li><code>nombre_victima</code>: Nombre de la víctima</li>
            <li><code>cedula_victima</code>: Cédula de la víctima</li>
            <li><code>informe_policial</code>: Descripción del caso</li>
        </ul>
    </div>

    <div class="endpoint">
        <p><span class="method">GET</span> <span class="path">/api/casos</span></p>
        <p>Obtener lista de casos con filtros opcionales</p>
        <p>Query params: <code>id_caso</code>, <code>id_alarma</code> (ambos opcionales)</p>
    </div>

    <div class="endpoint">
        <p><span class="method">GET</span> <span class="path">/api/casos/{id_caso}</span></p>
        <p>Obtener un caso específico por su ID</p>
    </div>

    <div class="endpoint">
        <p><span class="method">PUT</span> <span class="path">/api/casos/{id_caso}</span></p>
        <p>Actualizar parcialmente un caso; <code>id_caso</code> y
        <code>fecha_creacion</code> son inmutables</p>
    </div>

    <h2>Ejemplo de uso:</h2>

    <pre><code>// Crear un nuevo caso
fetch('http://0.0.0.0:8050/api/casos', {
  method: 'POST',
  headers: { 'Content-Type': 'application/json' },
  body: JSON.stringify({
    id_alarma: 'AL23072504',
    nombre_agente: 'Juan Pérez',
    cedula_agente: '1723456789',
    nombre_victima: 'María López',
    cedula_victima: '1712345678',
    informe_policial: 'Descripción del caso'
  })
})
  .then(response => response.json())
  .then(data => console.log(data));</code></pre>
</body>
</html>
"#;
