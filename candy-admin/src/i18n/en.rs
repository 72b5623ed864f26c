//! English (fallback) strings

pub(super) const STRINGS: &[(&str, &str)] = &[
    ("common.loading", "Loading..."),
    ("common.error", "An error occurred"),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.view", "View"),
    ("common.search", "Search"),
    ("common.noResults", "No results found"),
    ("common.back", "Back"),
    ("common.continue", "Continue"),
    ("common.retry", "Pull to retry"),
    ("auth.signIn", "Sign In"),
    ("auth.signUp", "Sign Up"),
    ("auth.signOut", "Sign Out"),
    ("auth.email", "Email Address"),
    ("auth.password", "Password"),
    ("auth.confirmPassword", "Confirm Password"),
    ("auth.forgotPassword", "Forgot Password?"),
    ("auth.noAccount", "Don't have an account?"),
    ("auth.hasAccount", "Already have an account?"),
    ("auth.profile", "Profile"),
    ("navigation.dashboard", "Dashboard"),
    ("navigation.products", "Products"),
    ("navigation.orders", "Orders"),
    ("navigation.users", "Users"),
    ("navigation.contentAI", "Content AI"),
    ("navigation.analytics", "Analytics"),
    ("dashboard.welcome", "Welcome, {{name}}!"),
    ("dashboard.overview", "Here's a quick overview of your CANDY store."),
    ("dashboard.totalCandies", "Total Candies"),
    ("dashboard.activePromotions", "Active Promotions"),
    ("dashboard.usersOnline", "Users Online"),
    ("dashboard.siteSettings", "Site Settings"),
    ("products.management", "Product Management"),
    ("products.subtitle", "Manage your inventory of candies and snacks."),
    ("products.addNew", "Add New Product"),
    ("products.name", "Name"),
    ("products.price", "Price"),
    ("products.inventory", "Inventory"),
    ("products.category", "Category"),
    ("products.description", "Description"),
    ("products.imageUrl", "Image URL"),
    ("products.stock", "Stock: {{count}} units"),
    ("orders.management", "Orders Management"),
    ("orders.subtitle", "View and manage all incoming orders from customers."),
    ("orders.orderNumber", "Order #{{number}}"),
    ("orders.status.pending", "Pending"),
    ("orders.status.processing", "Processing"),
    ("orders.status.shipped", "Shipped"),
    ("orders.status.delivered", "Delivered"),
    ("orders.status.cancelled", "Cancelled"),
    ("users.management", "Users Management"),
    ("users.subtitle", "View and manage registered store owners and administrators."),
    ("users.addNew", "Add User"),
    ("users.lastLogin", "Last login: {{date}}"),
    ("users.role.admin", "Admin"),
    ("users.role.manager", "Manager"),
    ("users.role.staff", "Staff"),
    ("contentAI.title", "Content AI"),
    ("contentAI.subtitle", "Generate marketing content for your candy store."),
    ("contentAI.generate", "Generate"),
    ("contentAI.post", "Post Now"),
    ("contentAI.published", "Published"),
    ("contentAI.schedule", "Schedule Post"),
    ("contentAI.templates", "Quick Templates"),
    ("contentAI.history", "Content History"),
    ("contentAI.promptPlaceholder", "Describe the content you want to create..."),
    ("contentAI.generatedContent", "Generated Content"),
    ("contentAI.copy", "Copy"),
    ("contentAI.copied", "Copied!"),
    ("contentAI.noUpcomingEvents", "No upcoming events"),
    ("contentAI.rating.useful", "Useful"),
    ("contentAI.rating.notRelevant", "Not Relevant"),
    ("contentAI.rating.saveTemplate", "Save as Template"),
    ("contentAI.rating.saved", "Saved to Templates"),
    ("contentAI.types.social", "Social"),
    ("contentAI.types.whatsapp", "WhatsApp"),
    ("contentAI.types.email", "Email"),
    ("contentAI.upcomingEvents", "Upcoming Events"),
    ("contentAI.eventCalendarSubtitle", "Plan your content for these upcoming events"),
    ("contentAI.daysUntil", "days until"),
    ("contentAI.regions", "regions"),
    ("contentAI.eventTypes.cultural", "Cultural"),
    ("contentAI.eventTypes.seasonal", "Seasonal"),
    ("contentAI.eventTypes.holiday", "Holiday"),
    ("contentAI.suggestions.title", "Suggested Templates"),
    ("contentAI.suggestions.subtitle", "Top performing templates in your language"),
    ("contentAI.actions.use", "Use Template"),
    ("contentAI.actions.clone", "Clone for Event"),
    ("contentAI.metrics.usageCount", "Usage"),
    ("contentAI.metrics.uses", "uses"),
    ("contentAI.metrics.rating", "Rating"),
    ("contentAI.metrics.engagement", "Engagement"),
    ("contentAI.metrics.engagements", "engagements"),
    ("contentAI.metrics.conversion", "Conversion"),
    ("contentAI.metrics.conversions", "conversions"),
    ("contentAI.campaign.create", "Create Campaign"),
    ("contentAI.campaign.title", "Campaign Builder"),
    ("contentAI.campaign.subtitle", "Create a targeted marketing campaign for your upcoming events"),
    ("contentAI.campaign.selectEvent", "Select Event"),
    ("contentAI.campaign.defineAudience", "Define Audience"),
    ("contentAI.campaign.createContent", "Create Content"),
    ("contentAI.campaign.schedule", "Schedule"),
    ("contentAI.campaign.eventDetails", "Event Details"),
    ("contentAI.campaign.eventName", "Event Name"),
    ("contentAI.campaign.eventNamePlaceholder", "Enter event name"),
    ("contentAI.campaign.startDate", "Start Date"),
    ("contentAI.campaign.endDate", "End Date"),
    ("contentAI.campaign.targetAudience", "Target Audience"),
    ("contentAI.campaign.selectRegions", "Select target regions for your campaign"),
    ("contentAI.campaign.audienceDescription", "Audience Description"),
    ("contentAI.campaign.message", "Message"),
    ("contentAI.campaign.sendDate", "Send Date"),
    ("contentAI.campaign.channels", "Channels"),
    ("contentAI.culturalTemplates.seasonal.title", "Seasonal"),
    ("contentAI.culturalTemplates.occasions.title", "Special Occasions"),
    ("analytics.title", "Sales Analytics"),
    ("analytics.subtitle", "Track sales performance and visualize data trends."),
    ("analytics.export", "Export"),
    ("analytics.timeRange", "Time Range"),
    ("analytics.metrics.revenue", "Total Revenue"),
    ("analytics.metrics.orders", "Total Orders"),
    ("analytics.metrics.items", "Items Sold"),
    ("analytics.metrics.customers", "New Customers"),
];

pub(super) const LISTS: &[(&str, &[&str])] = &[
    (
        "contentAI.culturalTemplates.seasonal.templates",
        &[
            "Summer vacation special: Buy 2 Get 1 Free on all chocolate bars!",
            "Back to School candy pack - perfect for lunchboxes",
            "Holiday season gift boxes now available",
        ],
    ),
    (
        "contentAI.culturalTemplates.occasions.templates",
        &[
            "Birthday party candy assortment",
            "Wedding favor custom candy boxes",
            "Corporate event sweet treats",
        ],
    ),
];
