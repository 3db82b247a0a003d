/// Categories the vision model is asked to assign.
pub const DETECTION_CATEGORIES: [&str; 9] = [
    "vegetable",
    "fruit",
    "protein",
    "dairy",
    "pantry",
    "condiment",
    "beverage",
    "spice",
    "other",
];

/// Returns the instruction sent along with every fridge photo
pub fn get_detection_instruction() -> String {
    format!(
        r#"Analyze this image and identify ALL grocery items, food ingredients, and cooking supplies visible.

Look carefully at:
- Fresh produce (fruits, vegetables)
- Packaged foods and containers
- Bottles and jars (sauces, condiments, beverages)
- Dairy products and proteins
- Pantry items and spices
- Any branded products (read labels when visible)

Be thorough and specific. For example:
- Instead of just "bottle", identify "olive oil bottle" or "soy sauce bottle"
- Instead of "vegetable", specify "red bell pepper" or "fresh broccoli"
- Include brand names when clearly visible
- Look in all areas of the image, including background items

Return a JSON array with 10-15 items (if available) in this exact format:
[
    {{
        "name": "specific item name",
        "confidence": 0.95,
        "category": "category type",
        "description": "detailed description"
    }}
]

Categories should be: {}"#,
        DETECTION_CATEGORIES.join(", ")
    )
}
