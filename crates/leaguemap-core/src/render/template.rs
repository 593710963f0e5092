//! The HTML shell of the generated document.
//!
//! Kept as a `&'static str` so it is bundled inside the binary. `{{TITLE}}`
//! and `{{STATE}}` are substituted by [`super::LeagueMap::to_html`].

pub const TITLE_SLOT: &str = "{{TITLE}}";
pub const STATE_SLOT: &str = "{{STATE}}";

pub const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"></script>

  <!-- Leaflet.markercluster 1.5.3 -->
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css" />
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css" />
  <script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>

  <!-- Leaflet.awesome-markers 2.0.2 + Font Awesome 6 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" crossorigin="anonymous" />
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>

  <!-- leaflet-search 3.0.9 -->
  <link rel="stylesheet" href="https://unpkg.com/leaflet-search@3.0.9/dist/leaflet-search.min.css" />
  <script src="https://unpkg.com/leaflet-search@3.0.9/dist/leaflet-search.min.js"></script>

  <style>
    html, body { width: 100%; height: 100%; margin: 0; padding: 0; }
    #map { position: absolute; top: 0; bottom: 0; right: 0; left: 0; }
    .leaguemap-tooltip th { text-align: left; padding-right: 6px; }
  </style>
</head>
<body>
  <div id="map"></div>

  <script type="application/json" id="leaguemap-state">{{STATE}}</script>
  <script>
    (function () {
      const state = JSON.parse(document.getElementById('leaguemap-state').textContent);

      const map = L.map('map', { center: state.map.center, zoom: state.map.zoom });
      const tiles = state.map.tiles;
      const base = L.tileLayer(tiles.url, {
        attribution: tiles.attribution,
        maxZoom: tiles.max_zoom,
      }).addTo(map);

      const control = L.control.layers(
        { [tiles.name]: base },
        {},
        { collapsed: state.layer_control.collapsed }
      );

      // One toggleable group per city, each wrapping a marker cluster.
      for (const city of state.cities) {
        const group = L.featureGroup();
        const cluster = L.markerClusterGroup();
        for (const m of city.markers) {
          const icon = L.AwesomeMarkers.icon(Object.assign({ iconColor: 'white' }, m.icon));
          L.marker(m.location, { icon: icon })
            .bindTooltip(m.tooltip)
            .bindPopup(m.popup)
            .addTo(cluster);
        }
        cluster.addTo(group);
        group.addTo(map);
        control.addOverlay(group, city.name);
      }

      const ov = state.overlay;
      const format = (value) =>
        ov.tooltip.localize && typeof value === 'number' ? value.toLocaleString() : String(value);

      const tooltipFor = (feature) => () => {
        const props = feature.properties || {};
        const table = document.createElement('table');
        table.className = 'leaguemap-tooltip';
        ov.tooltip.fields.forEach((field, i) => {
          if (props[field] === undefined || props[field] === null) {
            return;
          }
          const row = table.insertRow();
          const th = document.createElement('th');
          th.textContent = ov.tooltip.aliases[i];
          row.appendChild(th);
          row.insertCell().textContent = format(props[field]);
        });
        return table;
      };

      const geo = L.geoJSON(ov.data, {
        style: (feature) => feature.style,
        pointToLayer: (feature, latlng) =>
          L.circleMarker(latlng, Object.assign({ radius: 6 }, feature.style)),
        onEachFeature: (feature, layer) => {
          layer.bindTooltip(tooltipFor(feature), { sticky: true });
        },
      });
      if (ov.show) {
        geo.addTo(map);
      }
      control.addOverlay(geo, ov.name);

      const search = new L.Control.Search({
        layer: geo,
        propertyName: state.search.property_name,
        textPlaceholder: state.search.placeholder,
        collapsed: state.search.collapsed,
        initial: false,
        marker: false,
        zoom: 12,
      });
      search.on('search:locationfound', (e) => {
        if (!map.hasLayer(geo)) {
          geo.addTo(map);
        }
        e.layer.openTooltip();
      });
      map.addControl(search);

      control.addTo(map);
    })();
  </script>
</body>
</html>
"#;
