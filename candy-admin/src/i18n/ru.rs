//! Russian strings

pub(super) const STRINGS: &[(&str, &str)] = &[
    ("common.loading", "Загрузка..."),
    ("common.error", "Произошла ошибка"),
    ("common.save", "Сохранить"),
    ("common.cancel", "Отмена"),
    ("common.delete", "Удалить"),
    ("common.edit", "Редактировать"),
    ("common.view", "Просмотр"),
    ("common.search", "Поиск"),
    ("common.noResults", "Результаты не найдены"),
    ("auth.signIn", "Войти"),
    ("auth.signUp", "Регистрация"),
    ("auth.signOut", "Выйти"),
    ("auth.email", "Электронная почта"),
    ("auth.password", "Пароль"),
    ("auth.confirmPassword", "Подтверждение пароля"),
    ("auth.forgotPassword", "Забыли пароль?"),
    ("auth.noAccount", "Нет аккаунта?"),
    ("auth.hasAccount", "Уже есть аккаунт?"),
    ("navigation.dashboard", "Панель управления"),
    ("navigation.products", "Товары"),
    ("navigation.orders", "Заказы"),
    ("navigation.users", "Пользователи"),
    ("navigation.contentAI", "Контент AI"),
    ("navigation.analytics", "Аналитика"),
    ("dashboard.welcome", "Добро пожаловать, {{name}}!"),
    ("dashboard.overview", "Краткий обзор вашего магазина сладостей."),
    ("dashboard.totalCandies", "Всего сладостей"),
    ("dashboard.activePromotions", "Активные акции"),
    ("dashboard.usersOnline", "Пользователей онлайн"),
    ("dashboard.siteSettings", "Настройки сайта"),
    ("products.management", "Управление товарами"),
    ("products.subtitle", "Управляйте запасами конфет и снеков."),
    ("products.addNew", "Добавить новый товар"),
    ("products.name", "Название"),
    ("products.price", "Цена"),
    ("products.inventory", "Запас"),
    ("products.category", "Категория"),
    ("products.description", "Описание"),
    ("products.imageUrl", "URL изображения"),
    ("products.stock", "В наличии: {{count}} шт."),
    ("orders.management", "Управление заказами"),
    ("orders.subtitle", "Просмотр и управление входящими заказами клиентов."),
    ("orders.orderNumber", "Заказ №{{number}}"),
    ("orders.status.pending", "Ожидает"),
    ("orders.status.processing", "Обрабатывается"),
    ("orders.status.shipped", "Отправлен"),
    ("orders.status.delivered", "Доставлен"),
    ("orders.status.cancelled", "Отменён"),
    ("users.management", "Управление пользователями"),
    (
        "users.subtitle",
        "Просмотр и управление зарегистрированными владельцами магазинов и администраторами.",
    ),
    ("users.addNew", "Добавить пользователя"),
    ("users.lastLogin", "Последний вход: {{date}}"),
    ("users.role.admin", "Администратор"),
    ("users.role.manager", "Менеджер"),
    ("users.role.staff", "Сотрудник"),
    ("contentAI.title", "Контент AI"),
    ("contentAI.subtitle", "Создание маркетингового контента для вашего магазина сладостей"),
    ("contentAI.generate", "Создать"),
    ("contentAI.post", "Опубликовать"),
    ("contentAI.schedule", "Запланировать"),
    ("contentAI.templates", "Быстрые шаблоны"),
    ("contentAI.history", "История контента"),
    ("contentAI.rating.useful", "Полезно"),
    ("contentAI.rating.notRelevant", "Не подходит"),
    ("contentAI.rating.saveTemplate", "Сохранить как шаблон"),
    ("contentAI.rating.saved", "Сохранено в шаблонах"),
    ("contentAI.types.social", "Соцсети"),
    ("contentAI.types.whatsapp", "WhatsApp"),
    ("contentAI.types.email", "Email"),
    ("contentAI.culturalTemplates.seasonal.title", "Сезонные"),
    ("contentAI.culturalTemplates.weekly.title", "Еженедельные"),
    ("analytics.title", "Аналитика продаж"),
    ("analytics.subtitle", "Отслеживайте показатели продаж и анализируйте тренды."),
    ("analytics.export", "Экспорт"),
    ("analytics.timeRange", "Период времени"),
    ("analytics.metrics.revenue", "Общий доход"),
    ("analytics.metrics.orders", "Всего заказов"),
    ("analytics.metrics.items", "Продано товаров"),
    ("analytics.metrics.customers", "Новых клиентов"),
];

pub(super) const LISTS: &[(&str, &[&str])] = &[
    (
        "contentAI.culturalTemplates.seasonal.templates",
        &[
            "Новогодняя коллекция сладостей уже в продаже",
            "Подарочные наборы к 8 марта",
            "Летняя распродажа - скидки до 30%",
        ],
    ),
    (
        "contentAI.culturalTemplates.weekly.templates",
        &[
            "Сладкая среда - скидка 15% на все шоколадные конфеты",
            "Выходные со вкусом - 2 по цене 1",
            "Счастливые часы: с 15 до 18 скидка 20%",
        ],
    ),
];
