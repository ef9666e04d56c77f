//! Marketing page content served as JSON.
//!
//! The visual presentation lives entirely in the clients; these handlers
//! only hand out the copy and image metadata the pages render.

use axum::Json;

/// GET /api/content/about
pub async fn about() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "data": {
            "name": "Casa Serena",
            "tagline": "A peaceful countryside retreat",
            "values": [
                {
                    "title": "Warm Hospitality",
                    "description": "Every guest is treated like family. Our dedicated team ensures your comfort from arrival to departure."
                },
                {
                    "title": "Sustainability",
                    "description": "We're committed to eco-friendly practices, from locally-sourced ingredients to energy-efficient systems."
                },
                {
                    "title": "Excellence",
                    "description": "We take pride in every detail, from the quality of our linens to the freshness of our breakfast."
                },
                {
                    "title": "Community",
                    "description": "We support local artisans, farmers, and businesses, sharing the best of our region with our guests."
                }
            ]
        }
    }))
}

/// GET /api/content/gallery
pub async fn gallery() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "data": [
            { "image": "hero-guesthouse.jpg", "alt": "Casa Serena exterior view", "category": "Surroundings" },
            { "image": "room-deluxe.jpg", "alt": "Deluxe room interior", "category": "Rooms" },
            { "image": "gallery-garden.jpg", "alt": "Garden and terrace area", "category": "Facilities" },
            { "image": "room-single.jpg", "alt": "Comfort room interior", "category": "Rooms" },
            { "image": "gallery-breakfast.jpg", "alt": "Breakfast service", "category": "Facilities" },
            { "image": "gallery-view.jpg", "alt": "Countryside view from balcony", "category": "Surroundings" },
            { "image": "gallery-lounge.jpg", "alt": "Guest lounge area", "category": "Facilities" },
            { "image": "room-suite.jpg", "alt": "Grand suite interior", "category": "Rooms" }
        ]
    }))
}

/// GET /api/content/contact
pub async fn contact() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "data": {
            "email": "hello@casaserena.com",
            "services": [
                { "name": "Gourmet Breakfast", "note": "Included with select rooms" },
                { "name": "High-Speed Wi-Fi", "note": "Complimentary" },
                { "name": "Free Parking", "note": "Complimentary" },
                { "name": "Room Service", "note": "Available 7AM - 10PM" }
            ]
        }
    }))
}
