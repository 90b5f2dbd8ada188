//! Default content written into empty tables on first start.

use crate::model::{AmenityPayload, RoomPayload, Settings};

pub fn rooms() -> Vec<RoomPayload> {
    [
        (
            "Presidential Suite",
            "Panoramic city views, king-sized bed, and a private lounge area.",
            450.0,
            2,
            "85m²",
            0,
        ),
        (
            "Deluxe Room",
            "Elegant design with modern amenities and a spacious bathroom.",
            280.0,
            2,
            "45m²",
            15,
        ),
        (
            "Executive Suite",
            "Perfect for business travelers, featuring a dedicated workspace.",
            350.0,
            3,
            "60m²",
            -15,
        ),
    ]
    .into_iter()
    .map(|(name, description, price, capacity, size, hue_rotate)| RoomPayload {
        id: None,
        name: name.into(),
        description: description.into(),
        price,
        capacity,
        size: size.into(),
        image: "room.png".into(),
        hue_rotate,
    })
    .collect()
}

pub fn amenities() -> Vec<AmenityPayload> {
    [
        (
            "Infinity Pool",
            "Relax in our temperature-controlled rooftop pool with stunning views.",
            "🏊",
        ),
        (
            "Fine Dining",
            "Savor exquisite culinary creations at our award-winning restaurant.",
            "🍽️",
        ),
        (
            "Luxury Spa",
            "Rejuvenate your body and mind with our signature spa treatments.",
            "💆",
        ),
        (
            "Fitness Center",
            "State-of-the-art equipment available 24/7 for your workout routine.",
            "🏋️",
        ),
    ]
    .into_iter()
    .map(|(name, description, icon)| AmenityPayload {
        id: None,
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
    })
    .collect()
}

pub fn settings() -> Settings {
    Settings {
        hero_title: r#"Experience <span class="accent">Unmatched</span> Luxury"#.into(),
        hero_subtitle: "Where elegance meets comfort in the heart of the city.".into(),
        contact_email: "reservations@luxehaven.com".into(),
        contact_phone: "+1 (555) 123-4567".into(),
        contact_address: "123 Luxury Blvd, Metropolis, NY 10001".into(),
        footer_tagline: "Redefining luxury hospitality since 2024.".into(),
    }
}
