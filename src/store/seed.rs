//! Built-in example data the store starts with.

use crate::models::{Difficulty, NewRecipe};

/// The fixed recipe-category list.
pub(crate) fn recipe_categories() -> Vec<String> {
    vec![
        "Italian".into(),
        "Healthy".into(),
        "Dessert".into(),
        "Asian".into(),
        "Mexican".into(),
        "American".into(),
        "Vegetarian".into(),
        "Vegan".into(),
    ]
}

/// The three example recipes every fresh store is seeded with.
pub(crate) fn sample_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe::new("Classic Spaghetti Carbonara", "Italian")
            .with_description("A creamy Italian pasta dish with eggs, cheese, and pancetta")
            .with_cook_time(20)
            .with_servings(4)
            .with_difficulty(Difficulty::Medium)
            .with_ingredients(vec![
                "400g spaghetti".into(),
                "200g pancetta or guanciale".into(),
                "4 large eggs".into(),
                "100g Pecorino Romano cheese".into(),
                "Black pepper".into(),
                "Salt".into(),
            ])
            .with_instructions(vec![
                "Bring a large pot of salted water to boil and cook spaghetti until al dente"
                    .into(),
                "While pasta cooks, cut pancetta into small cubes and cook until crispy".into(),
                "Beat eggs with grated cheese and black pepper in a bowl".into(),
                "Drain pasta, reserving 1 cup of pasta water".into(),
                "Toss hot pasta with pancetta, then quickly mix in egg mixture".into(),
                "Add pasta water as needed to create a creamy sauce".into(),
                "Serve immediately with extra cheese and black pepper".into(),
            ])
            .with_tags(vec![
                "pasta".into(),
                "italian".into(),
                "quick".into(),
                "creamy".into(),
            ]),
        NewRecipe::new("Mediterranean Quinoa Salad", "Healthy")
            .with_description("Fresh and healthy salad with quinoa, vegetables, and feta cheese")
            .with_cook_time(15)
            .with_servings(6)
            .with_difficulty(Difficulty::Easy)
            .with_ingredients(vec![
                "1 cup quinoa".into(),
                "1 cucumber, diced".into(),
                "2 tomatoes, diced".into(),
                "1/2 red onion, finely chopped".into(),
                "1/2 cup kalamata olives".into(),
                "100g feta cheese".into(),
                "1/4 cup olive oil".into(),
                "2 tbsp lemon juice".into(),
                "Fresh herbs (parsley, mint)".into(),
            ])
            .with_instructions(vec![
                "Rinse quinoa and cook according to package instructions".into(),
                "Let quinoa cool completely".into(),
                "Dice all vegetables and crumble feta cheese".into(),
                "Whisk together olive oil, lemon juice, salt, and pepper".into(),
                "Combine quinoa with vegetables, olives, and feta".into(),
                "Drizzle with dressing and toss gently".into(),
                "Garnish with fresh herbs before serving".into(),
            ])
            .with_tags(vec![
                "healthy".into(),
                "vegetarian".into(),
                "mediterranean".into(),
                "salad".into(),
            ]),
        NewRecipe::new("Chocolate Chip Cookies", "Dessert")
            .with_description(
                "Classic homemade chocolate chip cookies that are crispy outside and chewy inside",
            )
            .with_cook_time(25)
            .with_servings(24)
            .with_difficulty(Difficulty::Easy)
            .with_ingredients(vec![
                "2 1/4 cups all-purpose flour".into(),
                "1 tsp baking soda".into(),
                "1 tsp salt".into(),
                "1 cup butter, softened".into(),
                "3/4 cup brown sugar".into(),
                "3/4 cup white sugar".into(),
                "2 large eggs".into(),
                "2 tsp vanilla extract".into(),
                "2 cups chocolate chips".into(),
            ])
            .with_instructions(vec![
                "Preheat oven to 375°F (190°C)".into(),
                "Mix flour, baking soda, and salt in a bowl".into(),
                "Cream together butter and both sugars until fluffy".into(),
                "Beat in eggs and vanilla extract".into(),
                "Gradually blend in flour mixture".into(),
                "Stir in chocolate chips".into(),
                "Drop rounded tablespoons onto ungreased cookie sheets".into(),
                "Bake for 9-11 minutes until golden brown".into(),
                "Cool on baking sheet for 2 minutes before removing".into(),
            ])
            .with_tags(vec![
                "dessert".into(),
                "cookies".into(),
                "chocolate".into(),
                "baking".into(),
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_categories() {
        let categories = recipe_categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0], "Italian");
        assert_eq!(categories[7], "Vegan");
    }

    #[test]
    fn test_three_sample_recipes() {
        let recipes = sample_recipes();
        assert_eq!(recipes.len(), 3);
    }

    #[test]
    fn test_samples_are_complete() {
        for recipe in sample_recipes() {
            assert!(!recipe.title.is_empty());
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.instructions.is_empty());
            assert!(recipe.cook_time > 0);
            assert!(recipe.servings > 0);
        }
    }

    #[test]
    fn test_sample_categories_come_from_the_fixed_list() {
        let categories = recipe_categories();
        for recipe in sample_recipes() {
            assert!(categories.contains(&recipe.category));
        }
    }
}
